use apu_fleet_calculator::apu::savings::{compute_savings, round_half_up, SavingsInput};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn default_scenario_matches_reference() {
    let input = SavingsInput::default();
    let res = compute_savings(&input);

    assert!(close(res.pre_apu_cost_per_truck, 6720.0), "{}", res.pre_apu_cost_per_truck);
    assert!(close(res.post_apu_cost_per_truck, 1344.0), "{}", res.post_apu_cost_per_truck);
    assert!(close(res.pre_apu_cost_total, 134_400.0));
    assert!(close(res.post_apu_cost_total, 26_880.0));
    assert!(close(res.annual_fuel_savings_total, 107_520.0));
    assert!(close(res.annual_maintenance_cost_total, 10_000.0));
    assert!(close(res.net_annual_savings, 97_520.0));
    assert!(close(res.total_initial_capital_cost, 200_000.0));
    assert!((res.payback_years - 2.0508).abs() < 1e-3, "{}", res.payback_years);
    assert_eq!(res.payback_months, 25.0);
    assert!(close(res.annualized_apu_cost_per_year, 50_000.0));
    assert!(close(res.total_net_benefit, 287_600.0), "{}", res.total_net_benefit);
}

#[test]
fn totals_are_linear_in_fleet_size() {
    let input = SavingsInput {
        fleet_size: 37.0,
        idle_hours_per_day: 6.5,
        fuel_price_per_gallon: 4.1,
        ..SavingsInput::default()
    };
    let res = compute_savings(&input);
    assert_eq!(res.pre_apu_cost_total, res.pre_apu_cost_per_truck * 37.0);
    assert_eq!(res.post_apu_cost_total, res.post_apu_cost_per_truck * 37.0);
    assert_eq!(
        res.annual_fuel_savings_total,
        res.pre_apu_cost_total - res.post_apu_cost_total
    );
}

#[test]
fn zero_fleet_zeroes_all_totals() {
    let input = SavingsInput {
        fleet_size: 0.0,
        ..SavingsInput::default()
    };
    let res = compute_savings(&input);
    // 대당 비용은 차량 수와 무관하다
    assert!(close(res.pre_apu_cost_per_truck, 6720.0));
    assert_eq!(res.pre_apu_cost_total, 0.0);
    assert_eq!(res.post_apu_cost_total, 0.0);
    assert_eq!(res.annual_fuel_savings_total, 0.0);
    assert_eq!(res.annual_maintenance_cost_total, 0.0);
    assert_eq!(res.net_annual_savings, 0.0);
    // 순절감액 0은 회수기간 분기의 > 0 조건을 만족하지 않는다
    assert_eq!(res.payback_years, 0.0);
    assert_eq!(res.payback_months, 0.0);
}

#[test]
fn negative_net_savings_zeroes_payback() {
    // 유지비가 연료 절감액을 초과하는 구성
    let input = SavingsInput {
        apu_maintenance_cost_per_year: 6000.0,
        ..SavingsInput::default()
    };
    let res = compute_savings(&input);
    assert!(res.net_annual_savings < 0.0);
    assert_eq!(res.payback_years, 0.0);
    assert_eq!(res.payback_months, 0.0);
    // 누적 시계열은 음수로 단조 감소한다
    let series = &res.cumulative_savings;
    assert_eq!(series.len(), 5);
    for pair in series.windows(2) {
        assert!(pair[1].savings < pair[0].savings);
    }
    assert!(close(series[4].savings, res.net_annual_savings * 5.0));
}

#[test]
fn cumulative_series_shape_and_labels() {
    let res = compute_savings(&SavingsInput::default());
    assert_eq!(res.cumulative_savings.len(), 5);
    for (i, point) in res.cumulative_savings.iter().enumerate() {
        assert_eq!(point.year, format!("Year {}", i + 1));
        assert!(close(point.savings, res.net_annual_savings * (i + 1) as f64));
    }
    // 양의 순절감액이면 강한 단조 증가
    for pair in res.cumulative_savings.windows(2) {
        assert!(pair[1].savings > pair[0].savings);
    }
}

#[test]
fn single_year_life_has_single_entry() {
    let input = SavingsInput {
        apu_useful_life_years: 1.0,
        ..SavingsInput::default()
    };
    let res = compute_savings(&input);
    assert_eq!(res.cumulative_savings.len(), 1);
    assert_eq!(res.cumulative_savings[0].year, "Year 1");
    assert_eq!(res.cumulative_savings[0].savings, res.net_annual_savings);
}

#[test]
fn zero_useful_life_propagates_unguarded() {
    let input = SavingsInput {
        apu_useful_life_years: 0.0,
        ..SavingsInput::default()
    };
    let res = compute_savings(&input);
    // 수명 0년에 대한 가드가 없으므로 연환산 비용은 무한대가 된다
    assert!(res.annualized_apu_cost_per_year.is_infinite());
    assert!(res.cumulative_savings.is_empty());
    assert_eq!(res.total_net_benefit, -res.total_initial_capital_cost);
}

#[test]
fn compute_is_idempotent() {
    let input = SavingsInput {
        fleet_size: 13.0,
        idle_hours_per_day: 7.3,
        fuel_price_per_gallon: 3.87,
        apu_installation_cost: 9500.0,
        apu_maintenance_cost_per_year: 450.0,
        apu_useful_life_years: 7.0,
        operating_days_per_year: 290.0,
    };
    let first = compute_savings(&input);
    let second = compute_savings(&input);
    assert_eq!(first, second);
}

#[test]
fn round_half_up_matches_reference_rounding() {
    assert_eq!(round_half_up(24.5), 25.0);
    assert_eq!(round_half_up(24.49), 24.0);
    // f64::round와 달리 음수 0.5 경계는 0 쪽으로 올린다
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(-2.51), -3.0);
}

#[test]
fn payback_months_rounds_to_nearest() {
    // payback_years * 12 = 24.61... -> 25
    let res = compute_savings(&SavingsInput::default());
    assert_eq!(res.payback_months, 25.0);

    // 투자비 48,760 / 순절감 97,520 = 0.5년 -> 6개월
    let input = SavingsInput {
        apu_installation_cost: 2438.0,
        ..SavingsInput::default()
    };
    let res = compute_savings(&input);
    assert_eq!(res.payback_months, 6.0);
}
