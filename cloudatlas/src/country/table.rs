//! Numeric topology id → ISO 3166-1 alpha-2 table.
//!
//! Keys are the decimal numeric-ISO feature ids exactly as encoded in
//! the world topology dataset, including leading zeros (`"076"`, not
//! `"76"`). The table is matched verbatim; re-deriving it is the only
//! correct response to a change in the dataset's id encoding.

/// (topology id, alpha-2 code), in upstream data order.
///
/// Id `818` appears twice in the upstream data; lookups take the later
/// entry.
pub(super) const TOPOLOGY_IDS: &[(&str, &str)] = &[
    // Asia
    ("156", "CN"),
    ("392", "JP"),
    ("702", "SG"),
    ("410", "KR"),
    ("356", "IN"),
    ("458", "MY"),
    ("608", "PH"),
    ("764", "TH"),
    ("360", "ID"),
    ("784", "AE"),
    ("344", "HK"),
    ("096", "BN"),
    ("462", "MV"),
    ("144", "LK"),
    ("050", "BD"),
    ("064", "BT"),
    ("524", "NP"),
    ("586", "PK"),
    ("004", "AF"),
    ("048", "BH"),
    ("368", "IQ"),
    ("364", "IR"),
    ("376", "IL"),
    ("400", "JO"),
    ("414", "KW"),
    ("422", "LB"),
    ("512", "OM"),
    ("634", "QA"),
    ("682", "SA"),
    ("760", "SY"),
    ("792", "TR"),
    ("887", "YE"),
    // North America
    ("840", "US"),
    ("124", "CA"),
    ("484", "MX"),
    ("320", "GT"),
    ("084", "BZ"),
    ("188", "CR"),
    ("558", "NI"),
    ("591", "PA"),
    ("214", "DO"),
    ("332", "HT"),
    ("388", "JM"),
    ("192", "CU"),
    // South America
    ("076", "BR"),
    ("032", "AR"),
    ("152", "CL"),
    ("170", "CO"),
    ("604", "PE"),
    ("858", "UY"),
    ("862", "VE"),
    ("218", "EC"),
    ("600", "PY"),
    ("740", "SR"),
    ("328", "GY"),
    // Europe
    ("276", "DE"),
    ("826", "GB"),
    ("250", "FR"),
    ("380", "IT"),
    ("724", "ES"),
    ("528", "NL"),
    ("056", "BE"),
    ("756", "CH"),
    ("040", "AT"),
    ("616", "PL"),
    ("203", "CZ"),
    ("703", "SK"),
    ("348", "HU"),
    ("642", "RO"),
    ("100", "BG"),
    ("191", "HR"),
    ("705", "SI"),
    ("070", "BA"),
    ("688", "RS"),
    ("499", "ME"),
    ("807", "MK"),
    ("008", "AL"),
    ("300", "GR"),
    ("440", "LT"),
    ("428", "LV"),
    ("233", "EE"),
    ("246", "FI"),
    ("752", "SE"),
    ("578", "NO"),
    ("208", "DK"),
    ("352", "IS"),
    ("372", "IE"),
    ("620", "PT"),
    ("643", "RU"),
    ("804", "UA"),
    ("112", "BY"),
    ("268", "GE"),
    ("051", "AM"),
    ("031", "AZ"),
    // Oceania
    ("036", "AU"),
    ("554", "NZ"),
    ("242", "FJ"),
    ("598", "PG"),
    ("090", "SB"),
    ("548", "VU"),
    ("584", "MH"),
    ("520", "NR"),
    ("296", "KI"),
    ("798", "TV"),
    ("882", "WS"),
    ("776", "TO"),
    // Africa
    ("012", "DZ"),
    ("818", "EG"),
    ("434", "LY"),
    ("504", "MA"),
    ("788", "TN"),
    ("710", "ZA"),
    ("566", "NG"),
    ("404", "KE"),
    // duplicate id in upstream data, later entry wins
    ("818", "EG"),
    ("231", "ET"),
    ("834", "TZ"),
    ("800", "UG"),
    ("646", "RW"),
    ("108", "BI"),
    ("180", "CD"),
    ("178", "CG"),
    ("120", "CM"),
    ("140", "CF"),
    ("148", "TD"),
    ("854", "BF"),
    ("466", "ML"),
    ("562", "NE"),
    ("624", "GW"),
    ("324", "GN"),
    ("694", "SL"),
    ("430", "LR"),
    ("384", "CI"),
    ("288", "GH"),
    ("768", "TG"),
    ("204", "BJ"),
    ("132", "CV"),
    ("270", "GM"),
    ("686", "SN"),
    ("478", "MR"),
];
