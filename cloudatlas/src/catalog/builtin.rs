//! Built-in provider and region data.
//!
//! This is the same data the upstream collection service seeds itself
//! with: the four known providers with their display colors, and the
//! per-provider region tables mapping region identifiers to country
//! codes and location names. A [`Catalog`] built from these tables lets
//! every view render without any external snapshot file.

use super::types::{Catalog, Provider, Region};

/// Provider identifier: Linode (Akamai).
pub const LINODE: &str = "linode";
/// Provider identifier: DigitalOcean.
pub const DIGITALOCEAN: &str = "digitalocean";
/// Provider identifier: Alibaba Cloud.
pub const ALIYUN: &str = "aliyun";
/// Provider identifier: Tencent Cloud.
pub const TENCENT: &str = "tencent";

/// Fixed rendering order for the known providers.
///
/// The list view renders one column per provider in exactly this order
/// regardless of catalog or selection order.
pub const PROVIDER_DISPLAY_ORDER: [&str; 4] = [LINODE, DIGITALOCEAN, ALIYUN, TENCENT];

/// (region id, country code, location name) per provider.
const LINODE_REGIONS: &[(&str, &str, &str)] = &[
    // United States
    ("us-east", "US", "Newark, NJ"),
    ("us-central", "US", "Dallas, TX"),
    ("us-west", "US", "Fremont, CA"),
    ("us-southeast", "US", "Atlanta, GA"),
    ("us-ord", "US", "Chicago, IL"),
    ("us-lax", "US", "Los Angeles, CA"),
    ("us-mia", "US", "Miami, FL"),
    ("us-sea", "US", "Seattle, WA"),
    ("us-iad", "US", "Washington, DC"),
    // Canada
    ("ca-central", "CA", "Toronto, CA"),
    // Europe
    ("eu-west", "GB", "London, UK"),
    ("eu-central", "DE", "Frankfurt, DE"),
    ("de-fra-2", "DE", "Frankfurt 2, DE"),
    ("fr-par", "FR", "Paris, FR"),
    ("it-mil", "IT", "Milan, IT"),
    ("nl-ams", "NL", "Amsterdam, NL"),
    ("se-sto", "SE", "Stockholm, SE"),
    ("gb-lon", "GB", "London 2, UK"),
    ("es-mad", "ES", "Madrid, ES"),
    // Asia-Pacific
    ("ap-south", "SG", "Singapore, SG"),
    ("ap-northeast", "JP", "Tokyo 2, JP"),
    ("ap-southeast", "AU", "Sydney, AU"),
    ("ap-west", "IN", "Mumbai, IN"),
    ("au-mel", "AU", "Melbourne, AU"),
    ("sg-sin-2", "SG", "Singapore 2, SG"),
    ("jp-osa", "JP", "Osaka, JP"),
    ("jp-tyo-3", "JP", "Tokyo 3, JP"),
    ("in-bom-2", "IN", "Mumbai 2, IN"),
    ("in-maa", "IN", "Chennai, IN"),
    ("id-cgk", "ID", "Jakarta, ID"),
    // South America
    ("br-gru", "BR", "São Paulo, BR"),
];

const DIGITALOCEAN_REGIONS: &[(&str, &str, &str)] = &[
    ("nyc1", "US", "New York 1"),
    ("nyc2", "US", "New York 2"),
    ("nyc3", "US", "New York 3"),
    ("sfo1", "US", "San Francisco 1"),
    ("sfo2", "US", "San Francisco 2"),
    ("sfo3", "US", "San Francisco 3"),
    ("tor1", "CA", "Toronto 1"),
    ("lon1", "GB", "London 1"),
    ("fra1", "DE", "Frankfurt 1"),
    ("ams2", "NL", "Amsterdam 2"),
    ("ams3", "NL", "Amsterdam 3"),
    ("sgp1", "SG", "Singapore 1"),
    ("blr1", "IN", "Bangalore 1"),
    ("syd1", "AU", "Sydney 1"),
];

const ALIYUN_REGIONS: &[(&str, &str, &str)] = &[
    // Mainland China
    ("cn-beijing", "CN", "华北2（北京）"),
    ("cn-zhangjiakou", "CN", "华北3（张家口）"),
    ("cn-huhehaote", "CN", "华北5（呼和浩特）"),
    ("cn-wulanchabu", "CN", "华北6（乌兰察布）"),
    ("cn-hangzhou", "CN", "华东1（杭州）"),
    ("cn-shanghai", "CN", "华东2（上海）"),
    ("cn-nanjing", "CN", "华东5（南京）"),
    ("cn-shenzhen", "CN", "华南1（深圳）"),
    ("cn-heyuan", "CN", "华南2（河源）"),
    ("cn-guangzhou", "CN", "华南3（广州）"),
    ("cn-fuzhou", "CN", "华东6（福州）"),
    ("cn-wuhan-lr", "CN", "华中1（武汉）"),
    ("cn-chengdu", "CN", "西南1（成都）"),
    ("cn-qingdao", "CN", "华北1（青岛）"),
    // Hong Kong
    ("cn-hongkong", "HK", "中国香港"),
    // Overseas
    ("ap-northeast-1", "JP", "日本（东京）"),
    ("ap-northeast-2", "KR", "韩国（首尔）"),
    ("ap-southeast-1", "SG", "新加坡"),
    ("ap-southeast-3", "MY", "马来西亚（吉隆坡）"),
    ("ap-southeast-5", "ID", "印尼（雅加达）"),
    ("ap-southeast-6", "PH", "菲律宾（马尼拉）"),
    ("ap-southeast-7", "TH", "泰国（曼谷）"),
    ("us-east-1", "US", "美国（弗吉尼亚）"),
    ("us-west-1", "US", "美国（硅谷）"),
    ("na-south-1", "MX", "墨西哥"),
    ("eu-west-1", "GB", "英国（伦敦）"),
    ("eu-central-1", "DE", "德国（法兰克福）"),
    ("me-east-1", "AE", "阿联酋（迪拜）"),
];

const TENCENT_REGIONS: &[(&str, &str, &str)] = &[
    // Mainland China
    ("ap-beijing", "CN", "华北地区(北京)"),
    ("ap-chengdu", "CN", "西南地区(成都)"),
    ("ap-chongqing", "CN", "西南地区(重庆)"),
    ("ap-guangzhou", "CN", "华南地区(广州)"),
    ("ap-shanghai", "CN", "华东地区(上海)"),
    ("ap-nanjing", "CN", "华东地区(南京)"),
    // Hong Kong
    ("ap-hongkong", "HK", "港澳台地区(中国香港)"),
    // Overseas
    ("ap-singapore", "SG", "亚太地区(新加坡)"),
    ("ap-bangkok", "TH", "亚太地区(曼谷)"),
    ("ap-jakarta", "ID", "亚太地区(雅加达)"),
    ("ap-seoul", "KR", "亚太地区(首尔)"),
    ("ap-tokyo", "JP", "亚太地区(东京)"),
    ("na-siliconvalley", "US", "美国西部(硅谷)"),
    ("na-ashburn", "US", "美国东部(弗吉尼亚)"),
    ("na-toronto", "CA", "北美地区(多伦多)"),
    ("sa-saopaulo", "BR", "南美地区(圣保罗)"),
    ("eu-frankfurt", "DE", "欧洲地区(法兰克福)"),
    ("eu-moscow", "RU", "欧洲地区(莫斯科)"),
];

/// Builds the built-in catalog: all four providers and their full
/// region tables, in display order.
pub fn builtin_catalog() -> Catalog {
    let providers = vec![
        Provider::new(LINODE, "Linode", "#3498db"),
        Provider::new(DIGITALOCEAN, "DigitalOcean", "#ffb3d9"),
        Provider::new(ALIYUN, "阿里云", "#ff8c00"),
        Provider::new(TENCENT, "腾讯云", "#2ecc71"),
    ];

    let mut regions = Vec::new();
    for (provider, table) in [
        (LINODE, LINODE_REGIONS),
        (DIGITALOCEAN, DIGITALOCEAN_REGIONS),
        (ALIYUN, ALIYUN_REGIONS),
        (TENCENT, TENCENT_REGIONS),
    ] {
        regions.extend(
            table
                .iter()
                .map(|(id, country, name)| Region::new(*id, provider, *country, *name)),
        );
    }

    Catalog::new(providers, regions)
}

/// Country code assumed for a region id missing from a provider's table.
///
/// The Chinese providers default to `CN`, the international ones to `US`;
/// unknown providers also default to `US`.
pub fn fallback_country(provider: &str) -> &'static str {
    match provider {
        ALIYUN | TENCENT => "CN",
        _ => "US",
    }
}

/// Looks up a region in the built-in tables.
pub fn builtin_region(provider: &str, region_id: &str) -> Option<Region> {
    let table = match provider {
        LINODE => LINODE_REGIONS,
        DIGITALOCEAN => DIGITALOCEAN_REGIONS,
        ALIYUN => ALIYUN_REGIONS,
        TENCENT => TENCENT_REGIONS,
        _ => return None,
    };
    table
        .iter()
        .find(|(id, _, _)| *id == region_id)
        .map(|(id, country, name)| Region::new(*id, provider, *country, *name))
}

/// Resolves the country code for a provider region, using the
/// per-provider fallback when the region id is not in the table.
pub fn country_of(provider: &str, region_id: &str) -> &'static str {
    let table = match provider {
        LINODE => LINODE_REGIONS,
        DIGITALOCEAN => DIGITALOCEAN_REGIONS,
        ALIYUN => ALIYUN_REGIONS,
        TENCENT => TENCENT_REGIONS,
        _ => return fallback_country(provider),
    };
    table
        .iter()
        .find(|(id, _, _)| *id == region_id)
        .map(|(_, country, _)| *country)
        .unwrap_or_else(|| fallback_country(provider))
}
