// Shared test helpers for writing GeoIP database fixtures.
//
// Real GeoLite files are too large to vendor, so these write minimal but
// well-formed legacy City (.dat) and MaxMind DB (.mmdb) files into temp dirs.

use std::fs::File;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use maxminddb_writer::metadata::IpVersion;
use maxminddb_writer::paths::IpAddrWithMask;
use maxminddb_writer::Database;
use serde_json::{json, Value};
use tempfile::TempDir;

// Legacy edition bytes
#[allow(dead_code)] // Used by other test files
pub const LEGACY_CITY_REV1: u8 = 2;
#[allow(dead_code)] // Used by other test files
pub const LEGACY_CITY_REV1_V6: u8 = 30;

// Indexes into the legacy country table
#[allow(dead_code)] // Used by other test files
pub const LEGACY_US: u8 = 225;
#[allow(dead_code)] // Used by other test files
pub const LEGACY_DE: u8 = 56;

/// A GeoIP2 City record.
#[allow(dead_code)] // Used by other test files
pub fn city_record(
    city: &str,
    country_iso: &str,
    continent_code: &str,
    continent: &str,
    time_zone: &str,
    latitude: f64,
    longitude: f64,
) -> Value {
    json!({
        "city": { "names": { "en": city } },
        "continent": { "code": continent_code, "names": { "en": continent } },
        "country": { "iso_code": country_iso },
        "location": {
            "latitude": latitude,
            "longitude": longitude,
            "time_zone": time_zone,
        },
    })
}

/// A GeoIP2 City record with only a country, as seen for anycast ranges.
#[allow(dead_code)] // Used by other test files
pub fn country_only_record(country_iso: &str) -> Value {
    json!({ "country": { "iso_code": country_iso } })
}

/// A legacy City record: country index, region, city, no postal code,
/// coordinates and an empty metro/area code.
#[allow(dead_code)] // Used by other test files
pub fn legacy_record(country: u8, region: &str, city: &str, latitude: f64, longitude: f64) -> Vec<u8> {
    let mut buf = vec![country];
    for part in [region, city, ""] {
        buf.extend_from_slice(part.as_bytes());
        buf.push(0);
    }
    for coord in [latitude, longitude] {
        let raw = ((coord + 180.0) * 10000.0).round() as u32;
        buf.extend_from_slice(&raw.to_le_bytes()[..3]);
    }
    buf.extend_from_slice(&[0, 0, 0]);
    buf
}

#[derive(Clone, Copy)]
enum Slot {
    Empty,
    Node(usize),
    Data(usize),
}

/// Binary trie over address bits for the legacy search tree.
#[derive(Default)]
struct Trie {
    nodes: Vec<[Slot; 2]>,
}

impl Trie {
    fn insert(&mut self, bits: &[bool], data: usize) {
        if self.nodes.is_empty() {
            self.nodes.push([Slot::Empty, Slot::Empty]);
        }
        let mut node = 0;
        for (depth, &bit) in bits.iter().enumerate() {
            let side = bit as usize;
            if depth + 1 == bits.len() {
                self.nodes[node][side] = Slot::Data(data);
                return;
            }
            node = match self.nodes[node][side] {
                Slot::Node(next) => next,
                Slot::Empty => {
                    self.nodes.push([Slot::Empty, Slot::Empty]);
                    let next = self.nodes.len() - 1;
                    self.nodes[node][side] = Slot::Node(next);
                    next
                }
                Slot::Data(_) => panic!("overlapping fixture networks"),
            };
        }
    }
}

/// Writes a legacy City database mapping each CIDR network to a record.
#[allow(dead_code)] // Used by other test files
pub fn write_legacy(path: &Path, edition: u8, networks: &[(&str, Vec<u8>)]) {
    let mut trie = Trie::default();
    for (i, (network, _)) in networks.iter().enumerate() {
        let network: IpAddrWithMask = network.parse().expect("valid CIDR network");
        let bits: Vec<bool> = (0..network.mask as u32)
            .map(|bit| match network.addr {
                IpAddr::V4(v4) => (u32::from(v4) >> (31 - bit)) & 1 == 1,
                IpAddr::V6(v6) => (u128::from(v6) >> (127 - bit)) & 1 == 1,
            })
            .collect();
        trie.insert(&bits, i);
    }

    // One pad byte so no record pointer equals the "not found" value
    let mut records = vec![0u8];
    let mut offsets = Vec::new();
    for (_, record) in networks {
        offsets.push(records.len() as u32);
        records.extend_from_slice(record);
    }

    let segments = trie.nodes.len() as u32;
    let value = |slot: Slot| match slot {
        Slot::Empty => segments,
        Slot::Node(n) => n as u32,
        Slot::Data(i) => segments + offsets[i],
    };

    let mut data = Vec::new();
    for node in &trie.nodes {
        for slot in node {
            data.extend_from_slice(&value(*slot).to_le_bytes()[..3]);
        }
    }
    data.extend_from_slice(&records);
    data.extend_from_slice(&[0xff, 0xff, 0xff, edition]);
    data.extend_from_slice(&segments.to_le_bytes()[..3]);

    std::fs::write(path, data).expect("Failed to write legacy fixture");
}

/// Writes an IPv6 MaxMind DB mapping each CIDR network to a record.
///
/// IPv4 networks are stored in the IPv4-compatible subtree (`::a.b.c.d`),
/// which is where readers look up IPv4 addresses.
#[allow(dead_code)] // Used by other test files
pub fn write_mmdb(path: &Path, database_type: &str, networks: Vec<(&str, Value)>) {
    let mut db = Database::default();
    db.metadata.ip_version = IpVersion::V6;
    db.metadata.database_type = database_type.to_string();
    db.metadata.binary_format_major_version = 2;
    db.metadata.build_epoch = 1_700_000_000;
    db.metadata.languages = vec!["en".to_string()];
    db.metadata
        .description
        .insert("en".to_string(), "ip_timezone test fixture".to_string());

    for (network, record) in networks {
        let network: IpAddrWithMask = network.parse().expect("valid CIDR network");
        let network = match network.addr {
            IpAddr::V4(v4) => IpAddrWithMask::new(IpAddr::V6(v4.to_ipv6_compatible()), network.mask + 96),
            IpAddr::V6(_) => network,
        };
        let data = db.insert_value(record).expect("Failed to encode fixture record");
        db.insert_node(network, data);
    }

    let file = File::create(path).expect("Failed to create MaxMind fixture");
    db.write_to(file).expect("Failed to write MaxMind fixture");
}

/// Schema-1 fixture: a v4 and a v6 legacy City database.
///
/// - 8.8.8.0/24: US, California, Mountain View
/// - 2a00:1450::/32: DE, Berlin
#[allow(dead_code)] // Used by other test files
pub fn legacy_fixture() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let v4 = temp_dir.path().join("GeoLiteCity.dat");
    let v6 = temp_dir.path().join("GeoLiteCityv6.dat");

    write_legacy(
        &v4,
        LEGACY_CITY_REV1,
        &[(
            "8.8.8.0/24",
            legacy_record(LEGACY_US, "CA", "Mountain View", 37.386, -122.0838),
        )],
    );
    write_legacy(
        &v6,
        LEGACY_CITY_REV1_V6,
        &[(
            "2a00:1450::/32",
            legacy_record(LEGACY_DE, "16", "Berlin", 52.5167, 13.4),
        )],
    );

    (temp_dir, v4, v6)
}

/// Schema-2 fixture: one MaxMind City database.
///
/// - 8.8.8.0/24: US, Mountain View, America/Los_Angeles
/// - 1.1.1.0/24: AU, country only (no city or timezone)
/// - 2001:4860::/32: US, Mountain View
/// - 49.36.0.0/16: IN, Mumbai, Asia/Kolkata
#[allow(dead_code)] // Used by other test files
pub fn maxmind_fixture() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("GeoLite2-City.mmdb");

    let mountain_view = || {
        city_record(
            "Mountain View",
            "US",
            "NA",
            "North America",
            "America/Los_Angeles",
            37.386,
            -122.0838,
        )
    };
    write_mmdb(
        &path,
        "GeoLite2-City",
        vec![
            ("8.8.8.0/24", mountain_view()),
            ("1.1.1.0/24", country_only_record("AU")),
            ("2001:4860::/32", mountain_view()),
            (
                "49.36.0.0/16",
                city_record("Mumbai", "IN", "AS", "Asia", "Asia/Kolkata", 19.0728, 72.8826),
            ),
        ],
    );

    (temp_dir, path)
}
