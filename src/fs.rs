use std::error::Error;
use std::fs;
use std::path::Path;

use crate::level::Level;
use crate::LoadLevel;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(|err| format!("Can't read level file {}: {}", path.display(), err).into())
}

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let path = self.as_ref();
        let level = read_file(path)?;
        level
            .parse()
            .map_err(|err| format!("Can't parse level file {}: {}", path.display(), err).into())
    }
}
