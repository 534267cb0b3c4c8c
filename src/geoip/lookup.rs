//! MaxMind DB (schema 2) record lookup.
//!
//! This module looks up addresses in a combined dual-stack City database and
//! flattens the GeoIP2 City structure into a [`LocationRecord`].

use std::net::IpAddr;

use maxminddb::Reader;

use super::types::LocationRecord;

/// Looks up an IP address in a MaxMind City database.
///
/// Returns `None` when the address has no data. Read and decode failures are
/// logged and also reported as `None`.
pub(crate) fn lookup_city_record(reader: &Reader<Vec<u8>>, ip: IpAddr) -> Option<LocationRecord> {
    // maxminddb 0.27 API: lookup() returns Result<LookupResult, MaxMindDbError>
    let city_lookup = match reader.lookup(ip) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("GeoIP lookup for {} failed: {}", ip, e);
            return None;
        }
    };

    if !city_lookup.has_data() {
        return None;
    }

    let city: maxminddb::geoip2::City = match city_lookup.decode() {
        Ok(Some(city)) => city,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Failed to decode GeoIP record for {}: {}", ip, e);
            return None;
        }
    };

    let record = LocationRecord {
        city: city.city.names.english.unwrap_or_default().to_string(),
        country_iso: city.country.iso_code.unwrap_or_default().to_string(),
        continent: city
            .continent
            .names
            .english
            .or(city.continent.code)
            .unwrap_or_default()
            .to_string(),
        timezone: city.location.time_zone.unwrap_or_default().to_string(),
        latitude: city.location.latitude.unwrap_or_default(),
        longitude: city.location.longitude.unwrap_or_default(),
    };

    log::trace!(
        "GeoIP lookup for {}: country={}, city={}, timezone={}",
        ip,
        record.country_iso,
        record.city,
        record.timezone
    );

    Some(record)
}
