//! Dependency ordering of descriptor files.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::error::Error;
use crate::google::protobuf::FileDescriptorProto;

/// Sorts descriptor files so that each file's dependencies are satisfied by
/// previous files in the list. Some generators require their input in this
/// order.
///
/// The algorithm is a quadratic insertion scan: whichever file has all of its
/// dependencies already emitted goes next, with ties broken by input order.
/// That is plenty for the small file counts produced here, where every
/// package is a single synthetic descriptor file.
pub(crate) fn topological_sort(
    files: Vec<FileDescriptorProto>,
) -> Result<Vec<FileDescriptorProto>, Error> {
    let total = files.len();
    let mut pending: Vec<Option<FileDescriptorProto>> = files.into_iter().map(Some).collect();
    let mut previous = BTreeSet::new();
    let mut result = Vec::with_capacity(total);
    while result.len() < total {
        let emitted = result.len();
        for slot in pending.iter_mut() {
            let Some(file) = slot else {
                continue;
            };
            if file.dependency.iter().any(|dep| !previous.contains(dep)) {
                // Depends on files not in the result yet.
                continue;
            }
            previous.insert(file.name().to_string());
            result.push(slot.take().unwrap());
            break;
        }
        if result.len() == emitted {
            // A full pass added nothing, so the remainder cannot be ordered.
            let remaining = pending.iter().flatten().map(|f| f.name()).join(", ");
            return Err(Error::DependencyCycle(remaining));
        }
    }
    Ok(result)
}
