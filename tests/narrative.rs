use apu_fleet_calculator::apu::narrative::{format_currency, strip_markup, summary_paragraph};
use apu_fleet_calculator::apu::savings::{compute_savings, SavingsInput};

#[test]
fn default_scenario_paragraph_is_verbatim() {
    let input = SavingsInput::default();
    let res = compute_savings(&input);
    let text = summary_paragraph(
        input.fleet_size,
        res.net_annual_savings,
        input.apu_installation_cost,
        res.payback_months,
    );
    assert_eq!(
        text,
        "By adopting APUs across <span class=\"font-bold\">20 trucks</span>, \
         you could achieve net annual fuel cost savings of <span class=\"font-bold\">$97,520</span>. \
         The initial investment of <span class=\"font-bold\">$200,000</span> has a projected \
         payback period of approximately <span class=\"font-bold\">2 years and 1 month</span>."
    );
}

#[test]
fn zero_net_savings_is_not_viable() {
    // 경계는 <= 이므로 정확히 0도 부적합 문구로 덮어쓴다
    let text = summary_paragraph(0.0, 0.0, 10_000.0, 0.0);
    assert!(text.ends_with("is not financially viable at this time."), "{text}");
    assert!(text.contains("<span class=\"font-bold\">0 trucks</span>"));
    assert!(!text.contains("payback period"));
}

#[test]
fn negative_net_savings_is_not_viable_regardless_of_cost() {
    let text = summary_paragraph(20.0, -12_480.0, 10_000.0, 0.0);
    assert!(text.contains("net annual fuel cost savings of <span class=\"font-bold\">$-12,480</span>"));
    assert!(text.ends_with(
        "The initial investment of <span class=\"font-bold\">$200,000</span> \
         is not financially viable at this time."
    ), "{text}");
}

#[test]
fn sub_month_payback_text() {
    let text = summary_paragraph(2.0, 50_000.0, 100.0, 0.0);
    assert!(text.contains(
        "has a very quick payback period of less than <span class=\"font-bold\">one month</span>."
    ), "{text}");
}

#[test]
fn singular_and_plural_period_wording() {
    // 12개월 -> "1 year" (월 항목 생략, 단수)
    let text = summary_paragraph(10.0, 1000.0, 100.0, 12.0);
    assert!(text.contains("approximately <span class=\"font-bold\">1 year</span>."), "{text}");

    // 13개월 -> "1 year and 1 month" (둘 다 단수)
    let text = summary_paragraph(10.0, 1000.0, 100.0, 13.0);
    assert!(
        text.contains("approximately <span class=\"font-bold\">1 year and 1 month</span>."),
        "{text}"
    );

    // 26개월 -> "2 years and 2 months"
    let text = summary_paragraph(10.0, 1000.0, 100.0, 26.0);
    assert!(
        text.contains("approximately <span class=\"font-bold\">2 years and 2 months</span>."),
        "{text}"
    );

    // 11개월 -> 연 항목 자체를 생략
    let text = summary_paragraph(10.0, 1000.0, 100.0, 11.0);
    assert!(text.contains("approximately <span class=\"font-bold\">11 months</span>."), "{text}");
}

#[test]
fn currency_rounds_half_up_and_groups_thousands() {
    assert_eq!(format_currency(0.0), "0");
    assert_eq!(format_currency(999.0), "999");
    assert_eq!(format_currency(1000.0), "1,000");
    assert_eq!(format_currency(97_520.4), "97,520");
    assert_eq!(format_currency(1_234_567.89), "1,234,568");
    assert_eq!(format_currency(0.5), "1");
    assert_eq!(format_currency(-97_520.0), "-97,520");
}

#[test]
fn strip_markup_removes_bold_spans() {
    let input = SavingsInput::default();
    let res = compute_savings(&input);
    let text = summary_paragraph(
        input.fleet_size,
        res.net_annual_savings,
        input.apu_installation_cost,
        res.payback_months,
    );
    let plain = strip_markup(&text);
    assert!(!plain.contains('<'));
    assert!(plain.starts_with("By adopting APUs across 20 trucks"));
    assert!(plain.contains("$97,520"));
}
