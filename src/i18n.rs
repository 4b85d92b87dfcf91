use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SAVINGS: &str = "main_menu.savings";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SAVINGS_HEADING: &str = "savings.heading";
    pub const SAVINGS_NOTE_ASSUMPTIONS: &str = "savings.note_assumptions";
    pub const PROMPT_FLEET_SIZE: &str = "prompt.fleet_size";
    pub const PROMPT_IDLE_HOURS: &str = "prompt.idle_hours";
    pub const PROMPT_FUEL_PRICE: &str = "prompt.fuel_price";
    pub const PROMPT_INSTALL_COST: &str = "prompt.install_cost";
    pub const PROMPT_MAINTENANCE_COST: &str = "prompt.maintenance_cost";
    pub const PROMPT_USEFUL_LIFE: &str = "prompt.useful_life";
    pub const PROMPT_OPERATING_DAYS: &str = "prompt.operating_days";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_PRE_COST: &str = "result.pre_cost";
    pub const RESULT_POST_COST: &str = "result.post_cost";
    pub const RESULT_PER_TRUCK: &str = "result.per_truck";
    pub const RESULT_FLEET_TOTAL: &str = "result.fleet_total";
    pub const RESULT_FUEL_SAVINGS: &str = "result.fuel_savings";
    pub const RESULT_MAINTENANCE: &str = "result.maintenance";
    pub const RESULT_NET_SAVINGS: &str = "result.net_savings";
    pub const RESULT_CAPITAL: &str = "result.capital";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_ANNUALIZED: &str = "result.annualized";
    pub const RESULT_NET_BENEFIT: &str = "result.net_benefit";
    pub const CUMULATIVE_HEADING: &str = "result.cumulative_heading";
    pub const SUMMARY_HEADING: &str = "result.summary_heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_SAVINGS: &str = "help.savings";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== APU Fleet Calculator ===",
        MAIN_MENU_SAVINGS => "1) APU 절감액 분석",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SAVINGS_HEADING => "\n-- APU 절감액 분석 --",
        SAVINGS_NOTE_ASSUMPTIONS => {
            "가정: 주엔진 공회전 0.8 gal/h, APU 0.2 gal/h, APU 대체율 80%."
        }
        PROMPT_FLEET_SIZE => "트럭 대수 (엔터=20): ",
        PROMPT_IDLE_HOURS => "하루 공회전 시간 [h] (엔터=8): ",
        PROMPT_FUEL_PRICE => "연료 단가 [$/gal] (엔터=3.5): ",
        PROMPT_INSTALL_COST => "대당 APU 설치비 [$] (엔터=10000): ",
        PROMPT_MAINTENANCE_COST => "대당 연간 유지비 [$] (엔터=500): ",
        PROMPT_USEFUL_LIFE => "APU 사용 수명 [년] (엔터=5): ",
        PROMPT_OPERATING_DAYS => "연간 운행 일수 (엔터=300): ",
        RESULT_HEADING => "\n[계산 결과]",
        RESULT_PRE_COST => "APU 도입 전 연간 연료비:",
        RESULT_POST_COST => "APU 도입 후 연간 연료비:",
        RESULT_PER_TRUCK => "대당",
        RESULT_FLEET_TOTAL => "전체",
        RESULT_FUEL_SAVINGS => "연간 연료비 절감액:",
        RESULT_MAINTENANCE => "연간 유지비 합계:",
        RESULT_NET_SAVINGS => "연간 순절감액:",
        RESULT_CAPITAL => "초기 투자비 합계:",
        RESULT_PAYBACK => "회수기간:",
        RESULT_ANNUALIZED => "연환산 APU 비용:",
        RESULT_NET_BENEFIT => "수명 기간 총 순이익:",
        CUMULATIVE_HEADING => "\n[누적 순절감액]",
        SUMMARY_HEADING => "\n[요약]",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        HELP_SAVINGS => {
            "도움말: 7개 파라미터를 입력하면 연간 절감액, 회수기간, 누적 절감액을 계산합니다. 엔터만 누르면 기본값을 사용합니다."
        }
        HELP_SETTINGS => "도움말: CLI/GUI 공통 언어 설정을 바꾸고 config.toml에 저장합니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== APU Fleet Calculator ===",
        MAIN_MENU_SAVINGS => "1) APU savings analysis",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SAVINGS_HEADING => "\n-- APU Savings Analysis --",
        SAVINGS_NOTE_ASSUMPTIONS => {
            "Assumptions: main engine idle 0.8 gal/h, APU 0.2 gal/h, APU duty 80%."
        }
        PROMPT_FLEET_SIZE => "Fleet size (enter=20): ",
        PROMPT_IDLE_HOURS => "Idle time [h/day] (enter=8): ",
        PROMPT_FUEL_PRICE => "Fuel price [$/gal] (enter=3.5): ",
        PROMPT_INSTALL_COST => "APU installation cost per truck [$] (enter=10000): ",
        PROMPT_MAINTENANCE_COST => "Annual APU maintenance per truck [$] (enter=500): ",
        PROMPT_USEFUL_LIFE => "APU useful life [years] (enter=5): ",
        PROMPT_OPERATING_DAYS => "Operating days per year (enter=300): ",
        RESULT_HEADING => "\n[Results]",
        RESULT_PRE_COST => "Pre-APU annual fuel cost:",
        RESULT_POST_COST => "Post-APU annual fuel cost:",
        RESULT_PER_TRUCK => "per truck",
        RESULT_FLEET_TOTAL => "fleet total",
        RESULT_FUEL_SAVINGS => "Annual fuel savings:",
        RESULT_MAINTENANCE => "Annual maintenance total:",
        RESULT_NET_SAVINGS => "Net annual savings:",
        RESULT_CAPITAL => "Total initial capital cost:",
        RESULT_PAYBACK => "Payback period:",
        RESULT_ANNUALIZED => "Annualized APU cost:",
        RESULT_NET_BENEFIT => "Total net benefit over life:",
        CUMULATIVE_HEADING => "\n[Cumulative net savings]",
        SUMMARY_HEADING => "\n[Summary]",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Korean  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        HELP_SAVINGS => {
            "Help: enter the seven fleet parameters to compute annual savings, payback and the cumulative series. Press enter alone to keep a default."
        }
        HELP_SETTINGS => "Help: changes the CLI/GUI language and saves it to config.toml.",
        _ => "[missing translation]",
    }
}
