//! Legacy City record decoding.

use super::tables;
use super::LegacyEdition;
use crate::error_handling::LegacyFormatError;

/// Maximum size of a City record on disk.
pub(crate) const FULL_RECORD_LENGTH: usize = 50;

/// A decoded legacy City record.
///
/// Only `country_code` and `region` feed the timezone. The remaining fields
/// are kept so the whole record is validated and visible in debug output.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LegacyRecord {
    pub country_code: Option<&'static str>,
    pub region: Option<String>,
    #[allow(dead_code)]
    pub city: Option<String>,
    #[allow(dead_code)]
    pub postal_code: Option<String>,
    #[allow(dead_code)]
    pub latitude: f64,
    #[allow(dead_code)]
    pub longitude: f64,
    #[allow(dead_code)]
    pub metro_code: Option<u32>,
    #[allow(dead_code)]
    pub area_code: Option<u32>,
}

impl LegacyRecord {
    /// Timezone derived from country and region.
    pub fn time_zone(&self) -> Option<&'static str> {
        tables::time_zone(self.country_code?, self.region.as_deref())
    }
}

/// Reads a little-endian unsigned integer of up to four bytes.
pub(crate) fn read_le(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &b)| acc | (u32::from(b) << (i * 8)))
}

/// Decodes a record starting at `buf[0]`. `position` is only used in errors.
pub(crate) fn decode(
    buf: &[u8],
    edition: LegacyEdition,
    position: usize,
) -> Result<LegacyRecord, LegacyFormatError> {
    let truncated = LegacyFormatError::TruncatedRecord { position };

    let (&country_index, mut rest) = buf.split_first().ok_or(truncated.clone())?;
    let country_code = tables::country_code(country_index);

    let mut strings: [Option<String>; 3] = Default::default();
    for slot in strings.iter_mut() {
        let end = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(truncated.clone())?;
        *slot = latin1(&rest[..end]);
        rest = &rest[end + 1..];
    }
    let [region, city, postal_code] = strings;

    if rest.len() < 6 {
        return Err(truncated);
    }
    let latitude = f64::from(read_le(&rest[0..3])) / 10000.0 - 180.0;
    let longitude = f64::from(read_le(&rest[3..6])) / 10000.0 - 180.0;
    rest = &rest[6..];

    let (mut metro_code, mut area_code) = (None, None);
    if edition.is_rev1() && country_code == Some("US") && rest.len() >= 3 {
        let combined = read_le(&rest[0..3]);
        metro_code = Some(combined / 1000);
        area_code = Some(combined % 1000);
    }

    Ok(LegacyRecord {
        country_code,
        region,
        city,
        postal_code,
        latitude,
        longitude,
        metro_code,
        area_code,
    })
}

// Legacy files store names as ISO-8859-1, which maps byte-for-byte onto U+0000..U+00FF.
fn latin1(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    Some(bytes.iter().map(|&b| char::from(b)).collect())
}
