use crate::pack::{PackError, Resource};
use std::ffi::OsString;
use std::fs;

/// Read one input file into a resource named by its path
///
/// The handle is scoped to this call and closed whether or not the read
/// succeeds.
pub fn read_resource(path: &str) -> Result<Resource, PackError> {
    let metadata = fs::metadata(path).map_err(|e| PackError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(PackError::IsDirectory {
            path: path.to_string(),
        });
    }

    let bytes = fs::read(path).map_err(|e| PackError::from_io(path, e))?;
    Ok(Resource::new(path, bytes))
}

/// Convert raw arguments to names, rejecting anything that is not UTF-8
pub fn names_from_args<I>(args: I) -> Result<Vec<String>, PackError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| PackError::InvalidName(raw.to_string_lossy().into_owned()))
        })
        .collect()
}
