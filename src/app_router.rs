use web_sys::UrlSearchParams;

use hanoi_core::GameRules;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InitConfig {
    pub(crate) disk_count: u32,
    pub(crate) muted: bool,
}

impl InitConfig {
    pub(crate) fn defaults(rules: &GameRules) -> Self {
        Self {
            disk_count: rules.default_disks(),
            muted: false,
        }
    }
}

/// Reads `?disks=N&muted=1` from the page URL.
pub(crate) fn load_init_config(rules: &GameRules) -> InitConfig {
    let Some(window) = web_sys::window() else {
        return InitConfig::defaults(rules);
    };
    let search = window.location().search().unwrap_or_default();
    let search = search.trim();
    if search.is_empty() {
        return InitConfig::defaults(rules);
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return InitConfig::defaults(rules);
    };
    init_config_from_params(
        params.get("disks").as_deref(),
        params.get("muted").as_deref(),
        rules,
    )
}

pub(crate) fn init_config_from_params(
    disks: Option<&str>,
    muted: Option<&str>,
    rules: &GameRules,
) -> InitConfig {
    let disk_count = disks
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .map(|count| rules.clamp_disk_count(count))
        .unwrap_or(rules.default_disks());
    let muted = muted.map(parse_flag).unwrap_or(false);
    InitConfig { disk_count, muted }
}

fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty()
        || raw == "1"
        || raw.eq_ignore_ascii_case("true")
        || raw.eq_ignore_ascii_case("yes")
        || raw.eq_ignore_ascii_case("on")
}
