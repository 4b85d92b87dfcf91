//! 계산 결과를 설명하는 영문 요약 문단 생성.
//!
//! 출력 문자열은 표시용 마크업(`<span class="font-bold">…</span>`)을 그대로
//! 포함한다. 터미널처럼 마크업을 쓸 수 없는 곳에서는 [`strip_markup`]으로
//! 제거해서 쓴다.

use crate::apu::savings::round_half_up;

/// 금액을 정수 달러로 반올림해 천 단위 구분 기호를 붙인 문자열로 만든다.
/// 소수점 이하(센트)는 표시하지 않는다. 예: 97520.4 -> "97,520".
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = round_half_up(value) as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// 볼드 span 마크업을 제거해 평문을 만든다.
pub fn strip_markup(text: &str) -> String {
    text.replace("<span class=\"font-bold\">", "")
        .replace("</span>", "")
}

fn bold(text: &str) -> String {
    format!("<span class=\"font-bold\">{text}</span>")
}

/// 결과 요약 문단을 생성한다.
///
/// 분기 규칙은 다음 순서를 그대로 유지한다:
/// 회수기간 1개월 미만 문구 -> 연/월 분해 문구 -> 순절감액이 0 이하이면
/// (0 포함) 투자 부적합 문구로 덮어쓴다. 연/월 복수형은 값이 1보다 클 때만
/// 붙이고, 0인 항목은 문구 자체를 생략한다.
pub fn summary_paragraph(
    fleet_size: f64,
    net_annual_savings: f64,
    apu_installation_cost: f64,
    payback_months: f64,
) -> String {
    let total_purchase_price = apu_installation_cost * fleet_size;
    let savings_text = format!(
        "By adopting APUs across {}, you could achieve net annual fuel cost savings of {}.",
        bold(&format!("{fleet_size} trucks")),
        bold(&format!("${}", format_currency(net_annual_savings))),
    );

    let price = bold(&format!("${}", format_currency(total_purchase_price)));
    let mut payback_text = if payback_months < 1.0 {
        format!(
            "The initial investment of {price} has a very quick payback period of less than {}.",
            bold("one month"),
        )
    } else {
        let years = (payback_months / 12.0).floor();
        let months = payback_months % 12.0;
        let mut payback_string = String::new();
        if years > 0.0 {
            payback_string.push_str(&format!(
                "{years} year{}",
                if years > 1.0 { "s" } else { "" }
            ));
        }
        if months > 0.0 {
            if years > 0.0 {
                payback_string.push_str(" and ");
            }
            payback_string.push_str(&format!(
                "{months} month{}",
                if months > 1.0 { "s" } else { "" }
            ));
        }
        format!(
            "The initial investment of {price} has a projected payback period of approximately {}.",
            bold(&payback_string),
        )
    };

    if net_annual_savings <= 0.0 {
        payback_text =
            format!("The initial investment of {price} is not financially viable at this time.");
    }

    format!("{savings_text} {payback_text}")
}
