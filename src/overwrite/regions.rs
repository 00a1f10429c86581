//! Region keyword tables
//!
//! Proxy names carry no structure, so region grouping works by regex over
//! whatever the providers hand us: CJK country names, ISO-ish codes and
//! flag emoji. The tables below are the single source for the per-region
//! filters; they are never mutated at runtime.

// ============================================================================
// Keyword Tables
// ============================================================================

/// Provider-metadata noise excluded from every group: traffic totals,
/// expiry notices, panel links and similar non-node entries.
pub const EXCLUDE_TERMS: &str = r"(?i)海外用户|群|邀请|返利|循环|官网|客服|网站|网址|获取|订阅|流量|到期|机场|下次|版本|官址|备用|过期|已用|联系|邮箱|工单|贩卖|通知|倒卖|防止|国内|地址|频道|无法|说明|使用|提示|特别|访问|支持|付费|失联|设置|总计|剩余|主页|游戏|关注|有效|禁止|发布|节点|问题|(\b(USE|USED|TOTAL|EXPIRE|EMAIL|PANEL)\b|(\d{4}-\d{2}-\d{2}|\dG))";

/// Per-country inclusion fragments, keyed by country code.
const INCLUDE_TERMS: &[(&str, &str)] = &[
    ("HK", r"香港|HK|Hong|🇭🇰"),
    ("US", r"美国|US|United States|America|🇺🇸"),
    // East Asia
    ("TW", r"台湾|TW|Taiwan|Wan|🇹🇼|🇨🇳"),
    ("JP", r"日本|JP|Japan|🇯🇵"),
    ("KR", r"韩国|韓|KR|Korea|🇰🇷"),
    // Southeast Asia
    ("SG", r"新加坡|狮城|SG|Singapore|🇸🇬"),
    ("MY", r"马来西亚|大马|MY|Malaysia|🇲🇾"),
    ("VN", r"越南|Vietnam|VN|🇻🇳"),
    ("PH", r"菲律宾|PH|Philippines|🇵🇭"),
    ("ID", r"印尼|印度尼西亚|Indonesia|ID|🇮🇩"),
    ("MM", r"缅甸|Myanmar|MM|🇲🇲"),
    ("KH", r"柬埔寨|Cambodia|KH|🇰🇭"),
    ("BN", r"文莱|Brunei|BN|🇧🇳"),
    ("TL", r"东帝汶|Timor-Leste|TL|🇹🇱"),
    ("TH", r"泰国|TH|Thailand|🇹🇭"),
    ("LA", r"老挝|\bL\bA|Laos|🇱🇦"),
    // Europe
    ("UK", r"英国|UK|United Kingdom|🇬🇧"),
    ("FR", r"法国|FR|France|🇫🇷"),
    ("DE", r"德国|DE|Germany|🇩🇪"),
    ("NL", r"荷兰|Netherlands|NL|🇳🇱"),
    ("ES", r"西班牙|Spain|ES|🇪🇸"),
    ("SE", r"瑞典|Sweden|SE|🇸🇪"),
    ("CH", r"瑞士|Switzerland|CH|🇨🇭"),
    ("PL", r"波兰|Poland|\bP\bL|🇵🇱"),
    ("IT", r"意大利|IT|Italy|🇮🇹"),
    ("RU", r"俄罗斯|RU|Russia|🇷🇺"),
    // Americas
    ("CA", r"加拿大|CA|Canada|🇨🇦"),
    ("BR", r"巴西|BR|Brazil|🇧🇷"),
    ("AR", r"阿根廷|AR|Argentina|🇦🇷"),
    ("MX", r"墨西哥|MX|Mexico|🇲🇽"),
    // Oceania
    ("AU", r"澳大利亚|AU|Australia|🇦🇺"),
    ("NZ", r"新西兰|NZ|New Zealand|🇳🇿"),
    // Africa
    ("ZA", r"南非|ZA|South Africa|🇿🇦"),
    ("EG", r"埃及|EG|Egypt|🇪🇬"),
    ("NG", r"尼日利亚|NG|Nigeria|🇳🇬"),
];

// Hand-curated continent aggregates; only these codes roll up into the
// macro regions below.
const ASIA_CODES: &[&str] = &[
    "TW", "JP", "KR", "SG", "MY", "TH", "VN", "PH", "ID", "MM", "KH", "BN", "TL", "LA",
];
const EU_AMERICAS_CODES: &[&str] = &[
    "UK", "FR", "DE", "NL", "ES", "SE", "CH", "PL", "CA", "BR", "AR", "MX", "RU", "IT",
];
const OCEANIA_CODES: &[&str] = &["AU", "NZ"];

// ============================================================================
// Region Filters
// ============================================================================

/// Display name of the US region group, referenced from group wiring.
pub const US_REGION: &str = "🇺🇸 美国";

/// One macro region: a display name plus the inclusion regex for it.
pub struct RegionFilter {
    pub name: &'static str,
    pub filter: String,
}

/// Inclusion fragment for a single country code.
fn include_term(code: &str) -> Option<&'static str> {
    INCLUDE_TERMS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, term)| *term)
}

/// Join the fragments of several country codes into one disjunction.
fn join_terms(codes: &[&str]) -> String {
    codes
        .iter()
        .filter_map(|code| include_term(code))
        .collect::<Vec<_>>()
        .join("|")
}

/// The five macro regions, in display order. Deterministic: built purely
/// from the static tables above.
pub fn region_filters() -> Vec<RegionFilter> {
    let regions = [
        ("🇭🇰 香港", join_terms(&["HK"])),
        (US_REGION, join_terms(&["US"])),
        ("🌏 亚洲", join_terms(ASIA_CODES)),
        ("🇪🇺 欧美", join_terms(EU_AMERICAS_CODES)),
        ("🇦🇺 大洋洲", join_terms(OCEANIA_CODES)),
    ];

    regions
        .into_iter()
        .map(|(name, terms)| RegionFilter {
            name,
            filter: format!("(?i)({})", terms),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_term_lookup() {
        assert_eq!(include_term("HK"), Some(r"香港|HK|Hong|🇭🇰"));
        assert_eq!(include_term("XX"), None);
    }

    #[test]
    fn test_join_terms_order_follows_code_list() {
        let joined = join_terms(&["JP", "KR"]);
        let jp = joined.find("Japan").unwrap();
        let kr = joined.find("Korea").unwrap();
        assert!(jp < kr);
    }

    #[test]
    fn test_region_filters_count_and_order() {
        let regions = region_filters();
        let names: Vec<_> = regions.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["🇭🇰 香港", "🇺🇸 美国", "🌏 亚洲", "🇪🇺 欧美", "🇦🇺 大洋洲"]
        );
    }

    #[test]
    fn test_region_filters_case_insensitive_wrapper() {
        for region in region_filters() {
            assert!(region.filter.starts_with("(?i)("));
            assert!(region.filter.ends_with(')'));
        }
    }

    #[test]
    fn test_asia_filter_contains_member_countries() {
        let regions = region_filters();
        let asia = &regions[2].filter;
        assert!(asia.contains("Taiwan"));
        assert!(asia.contains("Singapore"));
        assert!(asia.contains("Laos"));
        // Not part of the Asia aggregate
        assert!(!asia.contains("Hong"));
        assert!(!asia.contains("America"));
    }

    #[test]
    fn test_eu_americas_filter_mixes_continents() {
        let regions = region_filters();
        let eu = &regions[3].filter;
        assert!(eu.contains("Germany"));
        assert!(eu.contains("Canada"));
        assert!(eu.contains("Brazil"));
        assert!(eu.contains("Russia"));
    }

    #[test]
    fn test_exclude_terms_cover_metadata_noise() {
        assert!(EXCLUDE_TERMS.starts_with("(?i)"));
        assert!(EXCLUDE_TERMS.contains("流量"));
        assert!(EXCLUDE_TERMS.contains("到期"));
        assert!(EXCLUDE_TERMS.contains("EXPIRE"));
        assert!(EXCLUDE_TERMS.contains(r"\dG"));
    }
}
