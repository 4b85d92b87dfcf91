use std::io::{self, Write};

use crate::app::AppError;
use crate::apu::{compute_savings, format_currency, strip_markup, summary_paragraph, SavingsInput};
use crate::config::Config;
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Savings,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SAVINGS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Savings),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// APU 절감액 분석 메뉴를 처리한다.
pub fn handle_savings(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SAVINGS_HEADING));
    println!("{}", tr.t(keys::SAVINGS_NOTE_ASSUMPTIONS));
    println!("{}", tr.t(keys::HELP_SAVINGS));

    let defaults = SavingsInput::default();
    let input = SavingsInput {
        fleet_size: read_f64_or(tr, tr.t(keys::PROMPT_FLEET_SIZE), defaults.fleet_size)?,
        idle_hours_per_day: read_f64_or(
            tr,
            tr.t(keys::PROMPT_IDLE_HOURS),
            defaults.idle_hours_per_day,
        )?,
        fuel_price_per_gallon: read_f64_or(
            tr,
            tr.t(keys::PROMPT_FUEL_PRICE),
            defaults.fuel_price_per_gallon,
        )?,
        apu_installation_cost: read_f64_or(
            tr,
            tr.t(keys::PROMPT_INSTALL_COST),
            defaults.apu_installation_cost,
        )?,
        apu_maintenance_cost_per_year: read_f64_or(
            tr,
            tr.t(keys::PROMPT_MAINTENANCE_COST),
            defaults.apu_maintenance_cost_per_year,
        )?,
        apu_useful_life_years: read_f64_or(
            tr,
            tr.t(keys::PROMPT_USEFUL_LIFE),
            defaults.apu_useful_life_years,
        )?,
        operating_days_per_year: read_f64_or(
            tr,
            tr.t(keys::PROMPT_OPERATING_DAYS),
            defaults.operating_days_per_year,
        )?,
    };

    let result = compute_savings(&input);

    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} ${} {} / ${} {}",
        tr.t(keys::RESULT_PRE_COST),
        format_currency(result.pre_apu_cost_per_truck),
        tr.t(keys::RESULT_PER_TRUCK),
        format_currency(result.pre_apu_cost_total),
        tr.t(keys::RESULT_FLEET_TOTAL),
    );
    println!(
        "{} ${} {} / ${} {}",
        tr.t(keys::RESULT_POST_COST),
        format_currency(result.post_apu_cost_per_truck),
        tr.t(keys::RESULT_PER_TRUCK),
        format_currency(result.post_apu_cost_total),
        tr.t(keys::RESULT_FLEET_TOTAL),
    );
    println!(
        "{} ${}",
        tr.t(keys::RESULT_FUEL_SAVINGS),
        format_currency(result.annual_fuel_savings_total)
    );
    println!(
        "{} ${}",
        tr.t(keys::RESULT_MAINTENANCE),
        format_currency(result.annual_maintenance_cost_total)
    );
    println!(
        "{} ${}",
        tr.t(keys::RESULT_NET_SAVINGS),
        format_currency(result.net_annual_savings)
    );
    println!(
        "{} ${}",
        tr.t(keys::RESULT_CAPITAL),
        format_currency(result.total_initial_capital_cost)
    );
    println!(
        "{} {:.1} y ({:.0} mo)",
        tr.t(keys::RESULT_PAYBACK),
        result.payback_years,
        result.payback_months
    );
    println!(
        "{} ${}",
        tr.t(keys::RESULT_ANNUALIZED),
        format_currency(result.annualized_apu_cost_per_year)
    );
    println!(
        "{} ${}",
        tr.t(keys::RESULT_NET_BENEFIT),
        format_currency(result.total_net_benefit)
    );

    println!("{}", tr.t(keys::CUMULATIVE_HEADING));
    for point in &result.cumulative_savings {
        println!("{}: ${}", point.year, format_currency(point.savings));
    }

    println!("{}", tr.t(keys::SUMMARY_HEADING));
    let paragraph = summary_paragraph(
        input.fleet_size,
        result.net_annual_savings,
        input.apu_installation_cost,
        result.payback_months,
    );
    println!("{}", strip_markup(&paragraph));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "ko-kr".to_string(),
        "2" => "en-us".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 숫자를 읽되 빈 입력이면 기본값을 돌려준다.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
