//! Static tables for legacy City databases.
//!
//! Legacy records store a one-byte country index instead of a code, and carry
//! no timezone. Timezones are derived from country and region.

/// Country codes indexed by the first byte of a legacy record.
pub(crate) const COUNTRY_CODES: [&str; 256] = [
    "", "AP", "EU", "AD", "AE", "AF", "AG", "AI", "AL", "AM", "CW",
    "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AZ", "BA", "BB",
    "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BM", "BN", "BO",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD",
    "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN", "CO", "CR",
    "CU", "CV", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO",
    "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ",
    "FK", "FM", "FO", "FR", "SX", "GA", "GB", "GD", "GE", "GF",
    "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT",
    "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID",
    "IE", "IL", "IN", "IO", "IQ", "IR", "IS", "IT", "JM", "JO",
    "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW",
    "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT",
    "LU", "LV", "LY", "MA", "MC", "MD", "MG", "MH", "MK", "ML",
    "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV",
    "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF",
    "PG", "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW",
    "PY", "QA", "RE", "RO", "RU", "RW", "SA", "SB", "SC", "SD",
    "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO",
    "SR", "ST", "SV", "SY", "SZ", "TC", "TD", "TF", "TG", "TH",
    "TJ", "TK", "TM", "TN", "TO", "TL", "TR", "TT", "TV", "TW",
    "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE",
    "VG", "VI", "VN", "VU", "WF", "WS", "YE", "YT", "RS", "ZA",
    "ZM", "ME", "ZW", "A1", "A2", "O1", "AX", "GG", "IM", "JE",
    "BL", "MF", "BQ", "SS", "O1",
];

/// Looks up the country code for a legacy country index.
///
/// Index 0 means "no country" and returns `None`.
pub(crate) fn country_code(index: u8) -> Option<&'static str> {
    let code = COUNTRY_CODES[index as usize];
    (!code.is_empty()).then_some(code)
}

/// Countries spanning more than one zone. Their timezone depends on the
/// record's region and is unknown without one.
const MULTI_ZONE_COUNTRIES: [&str; 21] = [
    "AR", "AU", "BR", "CA", "CD", "CL", "CN", "EC", "ES", "GL", "ID", "KZ", "MN", "MX", "MY",
    "NZ", "PT", "RU", "UA", "US", "UZ",
];

/// Timezone for a country and (optional) region code.
///
/// Single-zone countries ignore the region. Multi-zone countries resolve by
/// region only and give `None` when the region is missing or unknown.
pub(crate) fn time_zone(country: &str, region: Option<&str>) -> Option<&'static str> {
    if MULTI_ZONE_COUNTRIES.contains(&country) {
        region.and_then(|region| region_time_zone(country, region))
    } else {
        country_time_zone(country)
    }
}

fn region_time_zone(country: &str, region: &str) -> Option<&'static str> {
    let tz = match (country, region) {
        // Argentina
        ("AR", "01" | "07" | "08" | "14" | "16" | "21") => "America/Argentina/Buenos_Aires",
        ("AR", "02" | "22") => "America/Argentina/Catamarca",
        ("AR", "03" | "06" | "09" | "24") => "America/Argentina/Tucuman",
        ("AR", "04" | "20") => "America/Argentina/Rio_Gallegos",
        ("AR", "05") => "America/Argentina/Cordoba",
        ("AR", "10") => "America/Argentina/Jujuy",
        ("AR", "11" | "15" | "19") => "America/Argentina/San_Luis",
        ("AR", "12") => "America/Argentina/La_Rioja",
        ("AR", "13") => "America/Argentina/Mendoza",
        ("AR", "17") => "America/Argentina/Salta",
        ("AR", "18") => "America/Argentina/San_Juan",
        ("AR", "23") => "America/Argentina/Ushuaia",

        // Australia
        ("AU", "01" | "02") => "Australia/Sydney",
        ("AU", "03") => "Australia/Darwin",
        ("AU", "04") => "Australia/Brisbane",
        ("AU", "05") => "Australia/Adelaide",
        ("AU", "06") => "Australia/Hobart",
        ("AU", "07") => "Australia/Melbourne",
        ("AU", "08") => "Australia/Perth",

        // Brazil
        ("BR", "01") => "America/Rio_Branco",
        ("BR", "02" | "28") => "America/Maceio",
        ("BR", "03" | "07" | "08" | "15" | "18" | "21" | "23" | "26" | "27" | "29") => {
            "America/Sao_Paulo"
        }
        ("BR", "04") => "America/Manaus",
        ("BR", "05") => "America/Bahia",
        ("BR", "06" | "20") => "America/Fortaleza",
        ("BR", "11") => "America/Campo_Grande",
        ("BR", "13" | "16") => "America/Belem",
        ("BR", "14") => "America/Cuiaba",
        ("BR", "17" | "22" | "30") => "America/Recife",
        ("BR", "24") => "America/Porto_Velho",
        ("BR", "25") => "America/Boa_Vista",
        ("BR", "31") => "America/Araguaina",

        // Canada (postal abbreviations)
        ("CA", "AB") => "America/Edmonton",
        ("CA", "BC") => "America/Vancouver",
        ("CA", "MB") => "America/Winnipeg",
        ("CA", "NB" | "NS" | "PE") => "America/Halifax",
        ("CA", "NL") => "America/St_Johns",
        ("CA", "NT") => "America/Yellowknife",
        ("CA", "NU") => "America/Rankin_Inlet",
        ("CA", "ON" | "QC") => "America/Toronto",
        ("CA", "SK") => "America/Regina",
        ("CA", "YT") => "America/Whitehorse",

        // Congo (Kinshasa)
        ("CD", "02" | "06" | "08") => "Africa/Kinshasa",
        ("CD", "05" | "10" | "11" | "12") => "Africa/Lubumbashi",

        // Chile
        (
            "CL",
            "01" | "02" | "03" | "04" | "05" | "06" | "07" | "08" | "09" | "10" | "11" | "12" | "13"
            | "14" | "15" | "16",
        ) => "America/Santiago",

        // China
        ("CN", "13") => "Asia/Urumqi",
        (
            "CN",
            "01" | "02" | "03" | "04" | "05" | "06" | "07" | "08" | "09" | "10" | "11" | "12" | "14"
            | "15" | "16" | "18" | "19" | "20" | "21" | "22" | "23" | "24" | "25" | "26" | "28"
            | "29" | "30" | "31" | "32" | "33",
        ) => "Asia/Shanghai",

        // Ecuador
        ("EC", "01") => "Pacific/Galapagos",
        (
            "EC",
            "02" | "03" | "04" | "05" | "06" | "07" | "08" | "09" | "10" | "11" | "12" | "13" | "14"
            | "15" | "17" | "18" | "19" | "20" | "22" | "23" | "24",
        ) => "America/Guayaquil",

        // Spain
        ("ES", "51") => "Africa/Ceuta",
        ("ES", "53") => "Atlantic/Canary",
        (
            "ES",
            "07" | "27" | "29" | "31" | "32" | "34" | "39" | "52" | "54" | "55" | "56" | "57" | "58"
            | "59" | "60",
        ) => "Europe/Madrid",

        // Greenland
        ("GL", "01") => "America/Thule",
        ("GL", "02" | "03") => "America/Nuuk",

        // Indonesia
        ("ID", "01" | "11" | "19" | "25" | "26") => "Asia/Pontianak",
        (
            "ID",
            "02" | "12" | "13" | "14" | "16" | "17" | "18" | "20" | "21" | "22" | "23" | "31",
        ) => "Asia/Makassar",
        ("ID", "03" | "04" | "05" | "06" | "07" | "08" | "10" | "15" | "24" | "30" | "33") => {
            "Asia/Jakarta"
        }
        ("ID", "09") => "Asia/Jayapura",

        // Kazakhstan
        ("KZ", "01" | "02" | "11" | "15" | "17") => "Asia/Almaty",
        ("KZ", "03" | "05" | "08" | "10" | "12" | "14") => "Asia/Qyzylorda",
        ("KZ", "04" | "13" | "16") => "Asia/Aqtobe",
        ("KZ", "06" | "09") => "Asia/Aqtau",
        ("KZ", "07") => "Asia/Oral",

        // Mongolia
        ("MN", "06" | "17") => "Asia/Choibalsan",
        ("MN", "11" | "20" | "21" | "25") => "Asia/Ulaanbaatar",
        ("MN", "19") => "Asia/Hovd",

        // Mexico
        (
            "MX",
            "01" | "05" | "08" | "09" | "11" | "12" | "13" | "16" | "17" | "20" | "21" | "22" | "24"
            | "29" | "30",
        ) => "America/Mexico_City",
        ("MX", "02") => "America/Tijuana",
        ("MX", "03" | "26") => "America/Hermosillo",
        ("MX", "04" | "27" | "31") => "America/Merida",
        ("MX", "06" | "15") => "America/Chihuahua",
        ("MX", "07" | "19" | "28" | "32") => "America/Monterrey",
        ("MX", "10" | "14" | "18" | "25") => "America/Mazatlan",
        ("MX", "23") => "America/Cancun",

        // Malaysia
        ("MY", "11" | "15" | "16") => "Asia/Kuching",
        (
            "MY",
            "01" | "02" | "03" | "04" | "05" | "06" | "07" | "08" | "09" | "12" | "13" | "14",
        ) => "Asia/Kuala_Lumpur",

        // New Zealand
        ("NZ", "10") => "Pacific/Chatham",
        (
            "NZ",
            "85" | "E7" | "E8" | "E9" | "F1" | "F2" | "F3" | "F4" | "F5" | "F6" | "F7" | "F8" | "F9"
            | "G1" | "G2" | "G3",
        ) => "Pacific/Auckland",

        // Portugal
        ("PT", "10") => "Atlantic/Madeira",
        ("PT", "23") => "Atlantic/Azores",
        (
            "PT",
            "02" | "03" | "04" | "05" | "06" | "07" | "08" | "09" | "11" | "13" | "14" | "16" | "17"
            | "18" | "19" | "20" | "21" | "22",
        ) => "Europe/Lisbon",

        // Russia
        (
            "RU",
            "06" | "09" | "10" | "21" | "25" | "28" | "37" | "41" | "42" | "43" | "47" | "48" | "49"
            | "51" | "52" | "56" | "62" | "66" | "69" | "72" | "76" | "77" | "83" | "85" | "86"
            | "88",
        ) => "Europe/Moscow",
        ("RU", "01" | "07" | "17" | "22" | "24" | "27" | "38" | "61" | "68" | "70" | "84") => {
            "Europe/Volgograd"
        }
        ("RU", "08" | "16" | "45" | "46" | "55" | "57" | "65" | "67" | "73" | "81") => {
            "Europe/Samara"
        }
        ("RU", "23" | "60") => "Europe/Kaliningrad",
        ("RU", "13" | "33" | "34" | "35" | "40" | "50" | "58" | "71" | "78" | "80" | "90") => {
            "Asia/Yekaterinburg"
        }
        ("RU", "32" | "54") => "Asia/Omsk",
        ("RU", "04" | "53" | "75" | "87") => "Asia/Novosibirsk",
        ("RU", "03" | "29") => "Asia/Novokuznetsk",
        ("RU", "18" | "31" | "39" | "74" | "91") => "Asia/Krasnoyarsk",
        ("RU", "02" | "11" | "14" | "20" | "79" | "82" | "93") => "Asia/Irkutsk",
        ("RU", "63") => "Asia/Yakutsk",
        ("RU", "05" | "30" | "59" | "89") => "Asia/Vladivostok",
        ("RU", "64") => "Asia/Sakhalin",
        ("RU", "44") => "Asia/Magadan",
        ("RU", "26") => "Asia/Kamchatka",
        ("RU", "15" | "36" | "92") => "Asia/Anadyr",

        // Ukraine
        ("UA", "08" | "11" | "17" | "20") => "Europe/Simferopol",
        (
            "UA",
            "01" | "02" | "03" | "04" | "05" | "06" | "07" | "09" | "10" | "13" | "14" | "15" | "16"
            | "18" | "19" | "21" | "22" | "23" | "24" | "25" | "26" | "27",
        ) => "Europe/Kyiv",

        // United States (postal abbreviations)
        ("US", "AK") => "America/Anchorage",
        ("US", "AZ") => "America/Phoenix",
        ("US", "HI") => "Pacific/Honolulu",
        ("US", "IN") => "America/Indiana/Indianapolis",
        ("US", "CA" | "NV" | "OR" | "WA") => "America/Los_Angeles",
        ("US", "CO" | "ID" | "MT" | "NM" | "UT" | "WY") => "America/Denver",
        (
            "US",
            "AL" | "AR" | "IA" | "IL" | "KS" | "LA" | "MN" | "MO" | "MS" | "ND" | "NE" | "OK"
            | "SD" | "TN" | "TX" | "WI",
        ) => "America/Chicago",
        (
            "US",
            "CT" | "DC" | "DE" | "FL" | "GA" | "KY" | "MA" | "MD" | "ME" | "MI" | "NC" | "NH"
            | "NJ" | "NY" | "OH" | "PA" | "RI" | "SC" | "VA" | "VT" | "WV",
        ) => "America/New_York",

        // Uzbekistan
        ("UZ", "01" | "03" | "06" | "13" | "14") => "Asia/Tashkent",
        ("UZ", "02" | "07" | "08" | "09" | "10" | "12") => "Asia/Samarkand",
        _ => return None,
    };
    Some(tz)
}

fn country_time_zone(country: &str) -> Option<&'static str> {
    let tz = match country {
        "AD" => "Europe/Andorra",
        "AE" => "Asia/Dubai",
        "AF" => "Asia/Kabul",
        "AG" => "America/Antigua",
        "AI" => "America/Anguilla",
        "AL" => "Europe/Tirane",
        "AM" => "Asia/Yerevan",
        "AO" => "Africa/Luanda",
        "AS" => "Pacific/Pago_Pago",
        "AT" => "Europe/Vienna",
        "AW" => "America/Aruba",
        "AX" => "Europe/Mariehamn",
        "AZ" => "Asia/Baku",
        "BA" => "Europe/Sarajevo",
        "BB" => "America/Barbados",
        "BD" => "Asia/Dhaka",
        "BE" => "Europe/Brussels",
        "BF" => "Africa/Ouagadougou",
        "BG" => "Europe/Sofia",
        "BH" => "Asia/Bahrain",
        "BI" => "Africa/Bujumbura",
        "BJ" => "Africa/Porto-Novo",
        "BL" => "America/St_Barthelemy",
        "BM" => "Atlantic/Bermuda",
        "BN" => "Asia/Brunei",
        "BO" => "America/La_Paz",
        "BQ" => "America/Kralendijk",
        "BS" => "America/Nassau",
        "BT" => "Asia/Thimphu",
        "BW" => "Africa/Gaborone",
        "BY" => "Europe/Minsk",
        "BZ" => "America/Belize",
        "CC" => "Indian/Cocos",
        "CF" => "Africa/Bangui",
        "CG" => "Africa/Brazzaville",
        "CH" => "Europe/Zurich",
        "CI" => "Africa/Abidjan",
        "CK" => "Pacific/Rarotonga",
        "CM" => "Africa/Douala",
        "CO" => "America/Bogota",
        "CR" => "America/Costa_Rica",
        "CU" => "America/Havana",
        "CV" => "Atlantic/Cape_Verde",
        "CW" => "America/Curacao",
        "CX" => "Indian/Christmas",
        "CY" => "Asia/Nicosia",
        "CZ" => "Europe/Prague",
        "DE" => "Europe/Berlin",
        "DJ" => "Africa/Djibouti",
        "DK" => "Europe/Copenhagen",
        "DM" => "America/Dominica",
        "DO" => "America/Santo_Domingo",
        "DZ" => "Africa/Algiers",
        "EE" => "Europe/Tallinn",
        "EG" => "Africa/Cairo",
        "EH" => "Africa/El_Aaiun",
        "ER" => "Africa/Asmara",
        "ET" => "Africa/Addis_Ababa",
        "FI" => "Europe/Helsinki",
        "FJ" => "Pacific/Fiji",
        "FK" => "Atlantic/Stanley",
        "FM" => "Pacific/Pohnpei",
        "FO" => "Atlantic/Faroe",
        "FR" => "Europe/Paris",
        "GA" => "Africa/Libreville",
        "GB" => "Europe/London",
        "GD" => "America/Grenada",
        "GE" => "Asia/Tbilisi",
        "GF" => "America/Cayenne",
        "GG" => "Europe/Guernsey",
        "GH" => "Africa/Accra",
        "GI" => "Europe/Gibraltar",
        "GM" => "Africa/Banjul",
        "GN" => "Africa/Conakry",
        "GP" => "America/Guadeloupe",
        "GQ" => "Africa/Malabo",
        "GR" => "Europe/Athens",
        "GS" => "Atlantic/South_Georgia",
        "GT" => "America/Guatemala",
        "GU" => "Pacific/Guam",
        "GW" => "Africa/Bissau",
        "GY" => "America/Guyana",
        "HK" => "Asia/Hong_Kong",
        "HN" => "America/Tegucigalpa",
        "HR" => "Europe/Zagreb",
        "HT" => "America/Port-au-Prince",
        "HU" => "Europe/Budapest",
        "IE" => "Europe/Dublin",
        "IL" => "Asia/Jerusalem",
        "IM" => "Europe/Isle_of_Man",
        "IN" => "Asia/Kolkata",
        "IO" => "Indian/Chagos",
        "IQ" => "Asia/Baghdad",
        "IR" => "Asia/Tehran",
        "IS" => "Atlantic/Reykjavik",
        "IT" => "Europe/Rome",
        "JE" => "Europe/Jersey",
        "JM" => "America/Jamaica",
        "JO" => "Asia/Amman",
        "JP" => "Asia/Tokyo",
        "KE" => "Africa/Nairobi",
        "KG" => "Asia/Bishkek",
        "KH" => "Asia/Phnom_Penh",
        "KI" => "Pacific/Tarawa",
        "KM" => "Indian/Comoro",
        "KN" => "America/St_Kitts",
        "KP" => "Asia/Pyongyang",
        "KR" => "Asia/Seoul",
        "KW" => "Asia/Kuwait",
        "KY" => "America/Cayman",
        "LA" => "Asia/Vientiane",
        "LB" => "Asia/Beirut",
        "LC" => "America/St_Lucia",
        "LI" => "Europe/Vaduz",
        "LK" => "Asia/Colombo",
        "LR" => "Africa/Monrovia",
        "LS" => "Africa/Maseru",
        "LT" => "Europe/Vilnius",
        "LU" => "Europe/Luxembourg",
        "LV" => "Europe/Riga",
        "LY" => "Africa/Tripoli",
        "MA" => "Africa/Casablanca",
        "MC" => "Europe/Monaco",
        "MD" => "Europe/Chisinau",
        "ME" => "Europe/Podgorica",
        "MF" => "America/Marigot",
        "MG" => "Indian/Antananarivo",
        "MH" => "Pacific/Majuro",
        "MK" => "Europe/Skopje",
        "ML" => "Africa/Bamako",
        "MM" => "Asia/Yangon",
        "MO" => "Asia/Macau",
        "MP" => "Pacific/Saipan",
        "MQ" => "America/Martinique",
        "MR" => "Africa/Nouakchott",
        "MS" => "America/Montserrat",
        "MT" => "Europe/Malta",
        "MU" => "Indian/Mauritius",
        "MV" => "Indian/Maldives",
        "MW" => "Africa/Blantyre",
        "MZ" => "Africa/Maputo",
        "NA" => "Africa/Windhoek",
        "NC" => "Pacific/Noumea",
        "NE" => "Africa/Niamey",
        "NF" => "Pacific/Norfolk",
        "NG" => "Africa/Lagos",
        "NI" => "America/Managua",
        "NL" => "Europe/Amsterdam",
        "NO" => "Europe/Oslo",
        "NP" => "Asia/Kathmandu",
        "NR" => "Pacific/Nauru",
        "NU" => "Pacific/Niue",
        "OM" => "Asia/Muscat",
        "PA" => "America/Panama",
        "PE" => "America/Lima",
        "PF" => "Pacific/Tahiti",
        "PG" => "Pacific/Port_Moresby",
        "PH" => "Asia/Manila",
        "PK" => "Asia/Karachi",
        "PL" => "Europe/Warsaw",
        "PM" => "America/Miquelon",
        "PN" => "Pacific/Pitcairn",
        "PR" => "America/Puerto_Rico",
        "PS" => "Asia/Gaza",
        "PW" => "Pacific/Palau",
        "PY" => "America/Asuncion",
        "QA" => "Asia/Qatar",
        "RE" => "Indian/Reunion",
        "RO" => "Europe/Bucharest",
        "RS" => "Europe/Belgrade",
        "RW" => "Africa/Kigali",
        "SA" => "Asia/Riyadh",
        "SB" => "Pacific/Guadalcanal",
        "SC" => "Indian/Mahe",
        "SD" => "Africa/Khartoum",
        "SE" => "Europe/Stockholm",
        "SG" => "Asia/Singapore",
        "SH" => "Atlantic/St_Helena",
        "SI" => "Europe/Ljubljana",
        "SJ" => "Arctic/Longyearbyen",
        "SK" => "Europe/Bratislava",
        "SL" => "Africa/Freetown",
        "SM" => "Europe/San_Marino",
        "SN" => "Africa/Dakar",
        "SO" => "Africa/Mogadishu",
        "SR" => "America/Paramaribo",
        "SS" => "Africa/Juba",
        "ST" => "Africa/Sao_Tome",
        "SV" => "America/El_Salvador",
        "SX" => "America/Lower_Princes",
        "SY" => "Asia/Damascus",
        "SZ" => "Africa/Mbabane",
        "TC" => "America/Grand_Turk",
        "TD" => "Africa/Ndjamena",
        "TF" => "Indian/Kerguelen",
        "TG" => "Africa/Lome",
        "TH" => "Asia/Bangkok",
        "TJ" => "Asia/Dushanbe",
        "TK" => "Pacific/Fakaofo",
        "TL" => "Asia/Dili",
        "TM" => "Asia/Ashgabat",
        "TN" => "Africa/Tunis",
        "TO" => "Pacific/Tongatapu",
        "TR" => "Europe/Istanbul",
        "TT" => "America/Port_of_Spain",
        "TV" => "Pacific/Funafuti",
        "TW" => "Asia/Taipei",
        "TZ" => "Africa/Dar_es_Salaam",
        "UG" => "Africa/Kampala",
        "UM" => "Pacific/Midway",
        "UY" => "America/Montevideo",
        "VA" => "Europe/Vatican",
        "VC" => "America/St_Vincent",
        "VE" => "America/Caracas",
        "VG" => "America/Tortola",
        "VI" => "America/St_Thomas",
        "VN" => "Asia/Ho_Chi_Minh",
        "VU" => "Pacific/Efate",
        "WF" => "Pacific/Wallis",
        "WS" => "Pacific/Apia",
        "YE" => "Asia/Aden",
        "YT" => "Indian/Mayotte",
        "ZA" => "Africa/Johannesburg",
        "ZM" => "Africa/Lusaka",
        "ZW" => "Africa/Harare",
        // AP, EU, AQ, BV, HM and the anonymous/satellite codes have no zone
        _ => return None,
    };
    Some(tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_indices() {
        assert_eq!(country_code(0), None);
        assert_eq!(country_code(1), Some("AP"));
        assert_eq!(country_code(103), Some("IN"));
        assert_eq!(country_code(225), Some("US"));
        assert_eq!(country_code(255), Some("O1"));
    }

    #[test]
    fn test_time_zone_by_region() {
        assert_eq!(time_zone("US", Some("CA")), Some("America/Los_Angeles"));
        assert_eq!(time_zone("US", Some("TX")), Some("America/Chicago"));
        assert_eq!(time_zone("CA", Some("BC")), Some("America/Vancouver"));
        assert_eq!(time_zone("AU", Some("08")), Some("Australia/Perth"));
        assert_eq!(time_zone("BR", Some("04")), Some("America/Manaus"));
    }

    #[test]
    fn test_time_zone_by_region_outside_the_americas() {
        assert_eq!(time_zone("RU", Some("59")), Some("Asia/Vladivostok"));
        assert_eq!(time_zone("RU", Some("48")), Some("Europe/Moscow"));
        assert_eq!(time_zone("MX", Some("02")), Some("America/Tijuana"));
        assert_eq!(time_zone("CN", Some("13")), Some("Asia/Urumqi"));
        assert_eq!(time_zone("CN", Some("23")), Some("Asia/Shanghai"));
        assert_eq!(time_zone("ES", Some("53")), Some("Atlantic/Canary"));
        assert_eq!(time_zone("NZ", Some("10")), Some("Pacific/Chatham"));
        assert_eq!(time_zone("KZ", Some("07")), Some("Asia/Oral"));
    }

    #[test]
    fn test_multi_zone_country_needs_a_known_region() {
        assert_eq!(time_zone("US", None), None);
        assert_eq!(time_zone("US", Some("ZZ")), None);
        assert_eq!(time_zone("RU", None), None);
        assert_eq!(time_zone("BR", Some("")), None);
        for country in MULTI_ZONE_COUNTRIES {
            assert_eq!(time_zone(country, None), None, "{}", country);
        }
    }

    #[test]
    fn test_single_zone_country_ignores_region() {
        assert_eq!(time_zone("IN", Some("16")), Some("Asia/Kolkata"));
        assert_eq!(time_zone("DE", None), Some("Europe/Berlin"));
        assert_eq!(time_zone("DE", Some("16")), Some("Europe/Berlin"));
        assert_eq!(time_zone("FR", Some("ZZ")), Some("Europe/Paris"));
    }

    #[test]
    fn test_time_zone_unknown_country() {
        assert_eq!(time_zone("EU", None), None);
        assert_eq!(time_zone("A1", None), None);
        assert_eq!(time_zone("", None), None);
    }
}
