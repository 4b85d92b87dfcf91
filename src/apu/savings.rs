/// 주엔진 공회전 연료 소모율 [gal/h]. 업계 평균 가정값.
pub const MAIN_ENGINE_IDLE_FUEL_BURN_GAL_PER_H: f64 = 0.8;
/// APU 가동 시 연료 소모율 [gal/h].
pub const APU_FUEL_BURN_GAL_PER_H: f64 = 0.2;
/// 공회전 시간 중 APU가 주엔진을 대체하는 비율 (0~1).
pub const APU_DUTY_FRACTION: f64 = 0.8;

/// APU 절감액 계산 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsInput {
    /// 트럭 대수 [대]
    pub fleet_size: f64,
    /// 대당 하루 공회전 시간 [h/일]
    pub idle_hours_per_day: f64,
    /// 연료 단가 [$/gal]
    pub fuel_price_per_gallon: f64,
    /// 대당 APU 설치비 [$]
    pub apu_installation_cost: f64,
    /// 대당 연간 APU 유지비 [$/년]
    pub apu_maintenance_cost_per_year: f64,
    /// APU 사용 수명 [년]
    pub apu_useful_life_years: f64,
    /// 연간 운행 일수 [일/년]
    pub operating_days_per_year: f64,
}

impl Default for SavingsInput {
    fn default() -> Self {
        Self {
            fleet_size: 20.0,
            idle_hours_per_day: 8.0,
            fuel_price_per_gallon: 3.50,
            apu_installation_cost: 10_000.0,
            apu_maintenance_cost_per_year: 500.0,
            apu_useful_life_years: 5.0,
            operating_days_per_year: 300.0,
        }
    }
}

/// 누적 절감액 시계열의 한 점. `year`는 "Year 1" 형태의 라벨.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeSavingsPoint {
    pub year: String,
    pub savings: f64,
}

/// 절감액 계산 결과. 입력이 같으면 항상 비트 단위로 같은 값이 나온다.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsResult {
    /// APU 도입 전 대당 연간 공회전 연료비 [$/년]
    pub pre_apu_cost_per_truck: f64,
    /// APU 도입 전 전체 차량 연간 연료비 [$/년]
    pub pre_apu_cost_total: f64,
    /// APU 도입 후 대당 연간 연료비 [$/년]
    pub post_apu_cost_per_truck: f64,
    /// APU 도입 후 전체 차량 연간 연료비 [$/년]
    pub post_apu_cost_total: f64,
    /// 전체 차량 연간 연료비 절감액 [$/년]
    pub annual_fuel_savings_total: f64,
    /// 전체 차량 연간 유지비 [$/년]
    pub annual_maintenance_cost_total: f64,
    /// 유지비 차감 후 연간 순절감액 [$/년]
    pub net_annual_savings: f64,
    /// 단순 회수기간 [년]. 순절감액이 0 이하이면 0.
    pub payback_years: f64,
    /// 회수기간 [개월]. `payback_years * 12`를 반올림한 값.
    pub payback_months: f64,
    /// 초기 투자비 합계 [$]
    pub total_initial_capital_cost: f64,
    /// 수명 기간 총 순이익 [$] (연료 절감 - 투자비 - 누적 유지비)
    pub total_net_benefit: f64,
    /// 연환산 APU 비용 [$/년] (투자비/수명 + 연간 유지비)
    pub annualized_apu_cost_per_year: f64,
    /// 수명 기간 누적 순절감액 시계열 (길이 = 사용 수명)
    pub cumulative_savings: Vec<CumulativeSavingsPoint>,
}

/// 0.5 경계를 항상 위로 올리는 반올림: floor(x + 0.5).
///
/// `f64::round`는 음수 0.5 경계에서 0에서 멀어지는 쪽으로 가므로 쓰지 않는다.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// 입력 파라미터로부터 APU 도입 경제성을 계산한다.
///
/// 순수 함수이며 어떤 유한 입력에도 실패하지 않는다. 0이나 음수 같은
/// 비정상 입력은 검증 없이 산술적으로 그대로 전파된다 (예: 수명 0년이면
/// 연환산 비용이 무한대).
pub fn compute_savings(input: &SavingsInput) -> SavingsResult {
    let apu_active_hours = input.idle_hours_per_day * APU_DUTY_FRACTION;

    // 대당 연간 비용
    let pre_apu_cost_per_truck = input.idle_hours_per_day
        * MAIN_ENGINE_IDLE_FUEL_BURN_GAL_PER_H
        * input.fuel_price_per_gallon
        * input.operating_days_per_year;
    let post_apu_cost_per_truck = apu_active_hours
        * APU_FUEL_BURN_GAL_PER_H
        * input.fuel_price_per_gallon
        * input.operating_days_per_year;

    // 전체 차량 비용
    let pre_apu_cost_total = pre_apu_cost_per_truck * input.fleet_size;
    let post_apu_cost_total = post_apu_cost_per_truck * input.fleet_size;

    let annual_fuel_savings_total = pre_apu_cost_total - post_apu_cost_total;
    let annual_maintenance_cost_total = input.apu_maintenance_cost_per_year * input.fleet_size;
    let total_initial_capital_cost = input.apu_installation_cost * input.fleet_size;
    let net_annual_savings = annual_fuel_savings_total - annual_maintenance_cost_total;

    // 단순 회수기간
    let payback_years = if net_annual_savings > 0.0 {
        total_initial_capital_cost / net_annual_savings
    } else {
        0.0
    };
    let payback_months = round_half_up(payback_years * 12.0);

    // 수명 기간 총 순이익
    let total_apu_life_savings = (pre_apu_cost_per_truck - post_apu_cost_per_truck)
        * input.apu_useful_life_years
        * input.fleet_size;
    let total_net_benefit = total_apu_life_savings
        - total_initial_capital_cost
        - annual_maintenance_cost_total * input.apu_useful_life_years;

    // 누적 순절감액: 할인 없는 단순 누적
    let mut cumulative_savings = Vec::new();
    let mut running_total = 0.0;
    let mut year = 1;
    while (year as f64) <= input.apu_useful_life_years {
        running_total += net_annual_savings;
        cumulative_savings.push(CumulativeSavingsPoint {
            year: format!("Year {year}"),
            savings: running_total,
        });
        year += 1;
    }

    // 수명 0년은 가드하지 않는다. inf/NaN이 그대로 결과로 전파된다.
    let annualized_apu_cost_per_year =
        total_initial_capital_cost / input.apu_useful_life_years + annual_maintenance_cost_total;

    SavingsResult {
        pre_apu_cost_per_truck,
        pre_apu_cost_total,
        post_apu_cost_per_truck,
        post_apu_cost_total,
        annual_fuel_savings_total,
        annual_maintenance_cost_total,
        net_annual_savings,
        payback_years,
        payback_months,
        total_initial_capital_cost,
        total_net_benefit,
        annualized_apu_cost_per_year,
        cumulative_savings,
    }
}
