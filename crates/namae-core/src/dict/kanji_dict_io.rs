use std::fs;
use std::path::Path;

use tracing::info;

use super::{DictError, KanjiDictionary, ReadingDictionary, ReadingEntry};
use crate::settings::settings;

pub const MAGIC: &[u8; 4] = b"NMKD";
pub(super) const VERSION: u8 = 1;
/// magic(4) + version(1) + reserved(3) + crc32(4)
pub(super) const HEADER_SIZE: usize = 12;

impl KanjiDictionary {
    /// Serialize to the compiled `NMKD` format.
    ///
    /// Entries are written sorted by kanji so that the same dictionary
    /// always produces the same bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let entries: Vec<(char, &ReadingEntry)> = self.sorted_entries();
        let body = bincode::serialize(&entries).map_err(DictError::Serialize)?;
        let crc = crc32fast::hash(&body);

        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&crc.to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }

        let mut crc_bytes = [0u8; 4];
        crc_bytes.copy_from_slice(&data[8..12]);
        let expected_crc = u32::from_le_bytes(crc_bytes);
        let body = &data[HEADER_SIZE..];
        if crc32fast::hash(body) != expected_crc {
            return Err(DictError::ChecksumMismatch);
        }

        let entries: Vec<(char, ReadingEntry)> =
            bincode::deserialize(body).map_err(DictError::Deserialize)?;
        Ok(Self::from_entries(entries))
    }

    /// Open a dictionary file, auto-detecting the format.
    ///
    /// Files starting with the `NMKD` magic are read as compiled
    /// dictionaries; anything else is parsed as a text lexicon using the
    /// separators from the global settings.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let data = fs::read(path)?;
        let dict = if data.starts_with(MAGIC) {
            Self::from_bytes(&data)?
        } else {
            let text = String::from_utf8(data).map_err(|e| DictError::Parse {
                line: 0,
                reason: format!("lexicon is not valid UTF-8: {e}"),
            })?;
            Self::parse_lexicon(&text, &settings().lexicon)?
        };
        info!(path = %path.display(), kanji = dict.len(), "opened dictionary");
        Ok(dict)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
