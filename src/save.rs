use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// For artifacts that are written to and loaded from disk as JSON.
///
/// Writes go to a sibling temporary file first and are renamed into place,
/// so a reader never sees a half-written artifact.
pub trait Disk: Serialize + DeserializeOwned {
    /// Name of the artifact in log lines.
    fn name() -> &'static str;
    /// read from disk
    fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("{:<32}{:<32}", format!("loading     {}", Self::name()), path.display());
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
    /// write to disk
    fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        log::info!("{:<32}{:<32}", format!("saving      {}", Self::name()), path.display());
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let temp = path.with_extension("tmp");
        {
            let file = std::fs::File::create(&temp)?;
            let mut writer = std::io::BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, self)?;
            std::io::Write::flush(&mut writer)?;
        }
        std::fs::rename(&temp, path)?;
        Ok(())
    }
    /// check if file exists on disk
    fn done(path: impl AsRef<Path>) -> bool {
        std::fs::metadata(path).is_ok()
    }
}
