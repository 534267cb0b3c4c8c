//! Reader for legacy GeoIP City databases (`.dat`, schema 1).
//!
//! A legacy file is a binary search tree over address bits followed by the
//! City records, with a small structure-info block at the end naming the
//! edition and the number of tree nodes ("segments"). IPv4 and IPv6 data live
//! in separate files. The whole file is kept in memory.

mod record;
mod tables;

use std::net::IpAddr;

use crate::error_handling::LegacyFormatError;
use record::{read_le, FULL_RECORD_LENGTH};

pub(crate) use record::LegacyRecord;

const STRUCTURE_INFO_DELIMITER: [u8; 3] = [0xff, 0xff, 0xff];
const STRUCTURE_INFO_MAX_SIZE: usize = 20;
const SEGMENT_RECORD_LENGTH: usize = 3;
const STANDARD_RECORD_LENGTH: usize = 3;
const NODE_LENGTH: usize = 2 * STANDARD_RECORD_LENGTH;

// Edition bytes
const COUNTRY_EDITION: u8 = 1;
const CITY_EDITION_REV1: u8 = 2;
const CITY_EDITION_REV0: u8 = 6;
const CITY_EDITION_REV1_V6: u8 = 30;
const CITY_EDITION_REV0_V6: u8 = 31;

/// Legacy City database editions that carry location records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LegacyEdition {
    CityRev0,
    CityRev1,
    CityRev0V6,
    CityRev1V6,
}

impl LegacyEdition {
    fn from_byte(edition: u8) -> Result<Self, LegacyFormatError> {
        match edition {
            CITY_EDITION_REV0 => Ok(Self::CityRev0),
            CITY_EDITION_REV1 => Ok(Self::CityRev1),
            CITY_EDITION_REV0_V6 => Ok(Self::CityRev0V6),
            CITY_EDITION_REV1_V6 => Ok(Self::CityRev1V6),
            other => Err(LegacyFormatError::UnsupportedEdition(other)),
        }
    }

    pub fn is_v6(self) -> bool {
        matches!(self, Self::CityRev0V6 | Self::CityRev1V6)
    }

    pub fn is_rev1(self) -> bool {
        matches!(self, Self::CityRev1 | Self::CityRev1V6)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CityRev0 => "GeoIP City Edition, Rev 0",
            Self::CityRev1 => "GeoIP City Edition, Rev 1",
            Self::CityRev0V6 => "GeoIP City Edition V6, Rev 0",
            Self::CityRev1V6 => "GeoIP City Edition V6, Rev 1",
        }
    }
}

/// An in-memory legacy City database for one address family.
#[derive(Debug)]
pub(crate) struct LegacyDatabase {
    data: Vec<u8>,
    edition: LegacyEdition,
    segments: u32,
}

impl LegacyDatabase {
    /// Parses the structure info and takes ownership of the file bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, LegacyFormatError> {
        let (edition_byte, segments) =
            read_structure_info(&data).unwrap_or((COUNTRY_EDITION, None));
        let edition = LegacyEdition::from_byte(edition_byte)?;
        let segments = segments.ok_or(LegacyFormatError::TooSmall(data.len()))?;

        if segments == 0 || (segments as usize).saturating_mul(NODE_LENGTH) > data.len() {
            return Err(LegacyFormatError::TooSmall(data.len()));
        }

        Ok(Self {
            data,
            edition,
            segments,
        })
    }

    pub fn edition(&self) -> LegacyEdition {
        self.edition
    }

    /// Finds the record for `ip`, or `None` if the address is not in the database.
    ///
    /// IPv4 addresses are looked up in IPv6 editions as IPv4-mapped addresses;
    /// IPv6 addresses without an IPv4 mapping are never found in IPv4 editions.
    pub fn lookup(&self, ip: IpAddr) -> Result<Option<LegacyRecord>, LegacyFormatError> {
        let (ipnum, bits) = match (ip, self.edition.is_v6()) {
            (IpAddr::V4(v4), false) => (u128::from(u32::from(v4)), 32),
            (IpAddr::V6(v6), false) => match v6.to_ipv4_mapped() {
                Some(v4) => (u128::from(u32::from(v4)), 32),
                None => return Ok(None),
            },
            (IpAddr::V4(v4), true) => (u128::from(v4.to_ipv6_mapped()), 128),
            (IpAddr::V6(v6), true) => (u128::from(v6), 128),
        };

        match self.seek_record(ipnum, bits)? {
            Some(pointer) => self.read_record(pointer).map(Some),
            None => Ok(None),
        }
    }

    /// Timezone for `ip`, derived from the record's country and region.
    pub fn time_zone_by_addr(&self, ip: IpAddr) -> Result<Option<&'static str>, LegacyFormatError> {
        Ok(self.lookup(ip)?.and_then(|record| record.time_zone()))
    }

    // Walks the tree from the most significant bit. A value of exactly
    // `segments` marks an address with no record.
    fn seek_record(&self, ipnum: u128, bits: u32) -> Result<Option<u32>, LegacyFormatError> {
        let mut offset = 0u32;
        for depth in (0..bits).rev() {
            let start = offset as usize * NODE_LENGTH;
            let node = self
                .data
                .get(start..start + NODE_LENGTH)
                .ok_or(LegacyFormatError::CorruptTree {
                    offset: offset as usize,
                })?;

            let next = if (ipnum >> depth) & 1 == 1 {
                read_le(&node[STANDARD_RECORD_LENGTH..])
            } else {
                read_le(&node[..STANDARD_RECORD_LENGTH])
            };

            if next >= self.segments {
                return Ok((next != self.segments).then_some(next));
            }
            offset = next;
        }
        Err(LegacyFormatError::CorruptTree {
            offset: offset as usize,
        })
    }

    fn read_record(&self, pointer: u32) -> Result<LegacyRecord, LegacyFormatError> {
        let position =
            pointer as usize + (NODE_LENGTH - 1) * self.segments as usize;
        if position >= self.data.len() {
            return Err(LegacyFormatError::TruncatedRecord { position });
        }
        let end = (position + FULL_RECORD_LENGTH).min(self.data.len());
        record::decode(&self.data[position..end], self.edition, position)
    }
}

/// Scans backwards from the end of the file for the structure-info block.
///
/// Returns the edition byte and, if present, the segment count.
fn read_structure_info(data: &[u8]) -> Option<(u8, Option<u32>)> {
    let mut pos = data.len().checked_sub(3)?;
    for _ in 0..STRUCTURE_INFO_MAX_SIZE {
        if data[pos..pos + 3] == STRUCTURE_INFO_DELIMITER {
            let mut edition = *data.get(pos + 3)?;
            if edition >= 106 {
                edition -= 105;
            }
            let segments = data
                .get(pos + 4..pos + 4 + SEGMENT_RECORD_LENGTH)
                .map(read_le);
            return Some((edition, segments));
        }
        pos = pos.checked_sub(1)?;
    }
    None
}
