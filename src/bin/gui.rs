#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use apu_fleet_calculator::{
    apu::{self, SavingsInput, SavingsResult},
    config, i18n,
};
use eframe::{egui, App, Frame};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

// 차트 공통 배색 (절감은 녹색, 비용은 주황)
const COLOR_POSITIVE: egui::Color32 = egui::Color32::from_rgb(0x35, 0xce, 0x8d);
const COLOR_NEGATIVE: egui::Color32 = egui::Color32::from_rgb(0xff, 0x88, 0x11);

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1200.0, 820.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "APU Fleet Calculator",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 표시가 가능한 시스템 폰트를 찾아 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색 (Windows)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 시스템 폰트 탐색 (Linux 계열)
    let unix_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];
    for cand in unix_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 4) 실패: 기본 폰트 유지 (영문 UI는 그대로 동작)
    Err("Korean-capable font not found; falling back to built-in fonts.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
        family.insert(0, name.to_string());
    }
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
        family.push(name.to_string());
    }
    ctx.set_fonts(fonts);
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    window_alpha: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_assumptions: bool,
    export_status: Option<String>,
    inputs: SavingsInput,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        eprintln!("GUI language resolved: {lang_code}");
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            show_settings_modal: false,
            show_help_modal: false,
            show_assumptions: true,
            export_status: None,
            inputs: SavingsInput::default(),
        }
    }

    fn ui_params(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.params.heading", "Fleet Parameters"));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("params_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.params.fleet_size", "Fleet size (# of trucks)"),
                        &txt("gui.params.fleet_size_tip", "Number of trucks fitted with APUs"),
                    );
                    ui.add(egui::DragValue::new(&mut self.inputs.fleet_size).speed(1.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.params.idle_time", "Idle time (hours/day)"),
                        &txt("gui.params.idle_time_tip", "Main-engine idle hours per truck per day"),
                    );
                    ui.add(egui::DragValue::new(&mut self.inputs.idle_hours_per_day).speed(0.5));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.params.fuel_price", "Fuel price ($/gallon)"),
                        &txt("gui.params.fuel_price_tip", "Diesel price per gallon"),
                    );
                    ui.add(egui::DragValue::new(&mut self.inputs.fuel_price_per_gallon).speed(0.05));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.params.install_cost", "APU installation cost ($/truck)"),
                        &txt("gui.params.install_cost_tip", "Upfront purchase and install cost per truck"),
                    );
                    ui.add(egui::DragValue::new(&mut self.inputs.apu_installation_cost).speed(100.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.params.maintenance", "Annual APU maintenance ($/truck)"),
                        &txt("gui.params.maintenance_tip", "Yearly maintenance cost per APU"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.inputs.apu_maintenance_cost_per_year)
                            .speed(50.0),
                    );
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.params.useful_life", "APU useful life (years)"),
                        &txt("gui.params.useful_life_tip", "Years before the APU is replaced"),
                    );
                    ui.add(egui::DragValue::new(&mut self.inputs.apu_useful_life_years).speed(1.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.params.operating_days", "Operating days per year"),
                        &txt("gui.params.operating_days_tip", "Days per year the trucks operate"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.inputs.operating_days_per_year).speed(5.0),
                    );
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        if ui
            .button(txt("gui.params.reset", "Reset to defaults"))
            .clicked()
        {
            self.inputs = SavingsInput::default();
        }
        ui.add_space(8.0);
        ui.checkbox(
            &mut self.show_assumptions,
            txt("gui.assumptions.toggle", "Show assumptions"),
        );
        if self.show_assumptions {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(txt("gui.assumptions.heading", "Assumptions used"));
                ui.label(txt(
                    "gui.assumptions.main_engine",
                    "Idling fuel consumption (main engine): 0.8 gal/h",
                ));
                ui.label(txt(
                    "gui.assumptions.apu",
                    "Idling fuel consumption (APU): 0.2 gal/h",
                ));
                ui.label(txt(
                    "gui.assumptions.duty",
                    "APU substitutes 80% of idle time",
                ));
                ui.small(txt(
                    "gui.assumptions.note",
                    "Industry-average values; adjust the parameters for a more precise analysis.",
                ));
            });
        }
    }

    fn ui_summary_cards(&self, ui: &mut egui::Ui, result: &SavingsResult) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.columns(5, |cols| {
            summary_card(
                &mut cols[0],
                &txt("gui.cards.pre", "PRE-APU ANNUAL COST"),
                &format!("${}", apu::format_currency(result.pre_apu_cost_per_truck)),
                &txt("gui.cards.per_truck", "Per truck"),
                Some(&format!(
                    "${} {}",
                    apu::format_currency(result.pre_apu_cost_total),
                    txt("gui.cards.fleet_total", "fleet total")
                )),
                COLOR_NEGATIVE,
            );
            summary_card(
                &mut cols[1],
                &txt("gui.cards.post", "POST-APU ANNUAL COST"),
                &format!("${}", apu::format_currency(result.post_apu_cost_per_truck)),
                &txt("gui.cards.per_truck", "Per truck"),
                Some(&format!(
                    "${} {}",
                    apu::format_currency(result.post_apu_cost_total),
                    txt("gui.cards.fleet_total", "fleet total")
                )),
                COLOR_POSITIVE,
            );
            summary_card(
                &mut cols[2],
                &txt("gui.cards.fuel_savings", "ANNUAL FUEL SAVINGS"),
                &format!(
                    "${}",
                    apu::format_currency(result.annual_fuel_savings_total)
                ),
                &txt("gui.cards.total_fleet", "Total fleet"),
                None,
                COLOR_POSITIVE,
            );
            summary_card(
                &mut cols[3],
                &txt("gui.cards.net_savings", "NET ANNUAL SAVINGS"),
                &format!("${}", apu::format_currency(result.net_annual_savings)),
                &txt("gui.cards.after_maintenance", "After maintenance"),
                None,
                COLOR_POSITIVE,
            );
            summary_card(
                &mut cols[4],
                &txt("gui.cards.payback", "PAYBACK PERIOD"),
                &format!("{:.1}", result.payback_years),
                &txt("gui.cards.years", "Years"),
                None,
                COLOR_POSITIVE,
            );
        });
    }

    fn ui_charts(&self, ui: &mut egui::Ui, result: &SavingsResult) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 1) 도입 전/후 연간 공회전 비용 비교 (세로 막대)
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(txt("gui.chart.cost_comparison", "Annual Idling Cost Comparison"));
            Plot::new("cost_comparison")
                .height(200.0)
                .legend(Legend::default())
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(
                        BarChart::new(vec![Bar::new(0.0, result.pre_apu_cost_total).width(0.6)])
                            .color(COLOR_NEGATIVE)
                            .name(txt("gui.chart.pre_cost", "Pre-APU Cost")),
                    );
                    plot_ui.bar_chart(
                        BarChart::new(vec![Bar::new(1.0, result.post_apu_cost_total).width(0.6)])
                            .color(COLOR_POSITIVE)
                            .name(txt("gui.chart.post_cost", "Post-APU Cost")),
                    );
                });
        });
        ui.add_space(8.0);

        // 2) 수명 기간 누적 순절감액 (면적 채운 선)
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(txt(
                "gui.chart.cumulative",
                "Cumulative Net Savings Over APU Life",
            ));
            let points: PlotPoints = result
                .cumulative_savings
                .iter()
                .enumerate()
                .map(|(i, p)| [(i + 1) as f64, p.savings])
                .collect();
            Plot::new("cumulative_savings")
                .height(200.0)
                .legend(Legend::default())
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(points)
                            .color(COLOR_POSITIVE)
                            .fill(0.0)
                            .name(txt("gui.chart.cumulative_series", "Cumulative Net Savings")),
                    );
                });
        });
        ui.add_space(8.0);

        // 3) 연간 비용-편익 분해 (가로 막대)
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(txt("gui.chart.breakdown", "Annual Cost-Benefit Breakdown"));
            Plot::new("cost_benefit")
                .height(160.0)
                .legend(Legend::default())
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(
                        BarChart::new(vec![
                            Bar::new(1.0, result.annual_fuel_savings_total).width(0.6)
                        ])
                        .horizontal()
                        .color(COLOR_POSITIVE)
                        .name(txt("gui.chart.fuel_savings", "Annual Fuel Savings")),
                    );
                    plot_ui.bar_chart(
                        BarChart::new(vec![
                            Bar::new(0.0, result.annual_maintenance_cost_total).width(0.6)
                        ])
                        .horizontal()
                        .color(COLOR_NEGATIVE)
                        .name(txt("gui.chart.maintenance", "Annual Maintenance")),
                    );
                });
        });
    }

    fn ui_summary_paragraph(&self, ui: &mut egui::Ui, result: &SavingsResult) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(txt("gui.summary.heading", "Fuel Cost Savings Summary"));
            let paragraph = apu::summary_paragraph(
                self.inputs.fleet_size,
                result.net_annual_savings,
                self.inputs.apu_installation_cost,
                result.payback_months,
            );
            ui.label(apu::strip_markup(&paragraph));
        });
    }

    fn export_csv(&mut self, result: &SavingsResult) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let dialog = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("apu_savings.csv");
        if let Some(path) = dialog.save_file() {
            match fs::write(&path, build_csv(&self.inputs, result)) {
                Ok(()) => {
                    self.export_status =
                        Some(format!("{} {}", txt("gui.export.saved", "Saved:"), path.display()))
                }
                Err(e) => {
                    self.export_status =
                        Some(format!("{} {e}", txt("gui.export.failed", "Export failed:")))
                }
            }
        }
    }
}

/// 결과를 CSV 한 장으로 직렬화한다 (파라미터 + 파생값 + 누적 시계열).
fn build_csv(inputs: &SavingsInput, result: &SavingsResult) -> String {
    let mut out = String::from("item,value\n");
    let rows: [(&str, f64); 7] = [
        ("fleet_size", inputs.fleet_size),
        ("idle_hours_per_day", inputs.idle_hours_per_day),
        ("fuel_price_per_gallon", inputs.fuel_price_per_gallon),
        ("apu_installation_cost", inputs.apu_installation_cost),
        (
            "apu_maintenance_cost_per_year",
            inputs.apu_maintenance_cost_per_year,
        ),
        ("apu_useful_life_years", inputs.apu_useful_life_years),
        ("operating_days_per_year", inputs.operating_days_per_year),
    ];
    for (name, value) in rows {
        out.push_str(&format!("{name},{value}\n"));
    }
    let derived: [(&str, f64); 12] = [
        ("pre_apu_cost_per_truck", result.pre_apu_cost_per_truck),
        ("pre_apu_cost_total", result.pre_apu_cost_total),
        ("post_apu_cost_per_truck", result.post_apu_cost_per_truck),
        ("post_apu_cost_total", result.post_apu_cost_total),
        ("annual_fuel_savings_total", result.annual_fuel_savings_total),
        (
            "annual_maintenance_cost_total",
            result.annual_maintenance_cost_total,
        ),
        ("net_annual_savings", result.net_annual_savings),
        ("payback_years", result.payback_years),
        ("payback_months", result.payback_months),
        (
            "total_initial_capital_cost",
            result.total_initial_capital_cost,
        ),
        ("total_net_benefit", result.total_net_benefit),
        (
            "annualized_apu_cost_per_year",
            result.annualized_apu_cost_per_year,
        ),
    ];
    for (name, value) in derived {
        out.push_str(&format!("{name},{value}\n"));
    }
    for point in &result.cumulative_savings {
        out.push_str(&format!("cumulative_{},{}\n", point.year, point.savings));
    }
    out
}

fn summary_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    subtitle: &str,
    subtitle2: Option<&str>,
    value_color: egui::Color32,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.small(title);
            ui.label(
                egui::RichText::new(value)
                    .size(20.0)
                    .strong()
                    .color(value_color),
            );
            ui.small(subtitle);
            if let Some(s2) = subtitle2 {
                ui.small(s2);
            }
        });
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 입력이 바뀔 때마다 전체 재계산. 코어는 상태가 없으므로 캐시하지 않는다.
        let result = apu::compute_savings(&self.inputs);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "APU Fleet Calculator Dashboard"));
                ui.separator();
                ui.label(txt(
                    "gui.nav.subtitle",
                    "Evaluate fuel cost savings from installing APUs",
                ));
                ui.separator();
                if ui.button(txt("gui.export.button", "Export CSV")).clicked() {
                    self.export_csv(&result);
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
                if let Some(status) = &self.export_status {
                    ui.separator();
                    ui.small(status.clone());
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut open = self.show_settings_modal;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(txt(
                        "gui.settings.lang_label",
                        "Language (auto/ko/ko-kr/en/en-us):",
                    ));
                    ui.text_edit_singleline(&mut self.lang_input);
                    ui.label(txt(
                        "gui.settings.pack_label",
                        "Language pack directory (optional):",
                    ));
                    ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                    ui.add(
                        egui::Slider::new(&mut self.window_alpha, 0.3..=1.0)
                            .text(txt("gui.settings.alpha", "Window opacity")),
                    );
                    if ui.button(txt("gui.settings.apply", "Apply & save")).clicked() {
                        self.config.language = self.lang_input.trim().to_string();
                        self.config.language_pack_dir = if self.lang_pack_dir_input.trim().is_empty()
                        {
                            None
                        } else {
                            Some(self.lang_pack_dir_input.trim().to_string())
                        };
                        self.config.window_alpha = self.window_alpha;
                        let lang_code = i18n::resolve_language(
                            "auto",
                            Some(self.config.language.as_str()),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &lang_code,
                            self.config.language_pack_dir.as_deref(),
                        );
                        self.lang_save_status = Some(match self.config.save() {
                            Ok(()) => format!("OK: {lang_code}"),
                            Err(e) => format!("save failed: {e}"),
                        });
                    }
                    if let Some(status) = &self.lang_save_status {
                        ui.small(status.clone());
                    }
                });
            self.show_settings_modal = open;
        }

        // 도움말 모달
        if self.show_help_modal {
            let mut open = self.show_help_modal;
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(txt(
                        "gui.about.body1",
                        "Computes fuel-cost savings from installing Auxiliary Power Units (APUs) on idling trucks.",
                    ));
                    ui.label(txt(
                        "gui.about.body2",
                        "All figures are recomputed from the current parameters on every change; nothing is persisted except settings.",
                    ));
                });
            self.show_help_modal = open;
        }

        // 좌측 파라미터 + 본문
        egui::SidePanel::left("params")
            .resizable(true)
            .min_width(240.0)
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.ui_params(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_summary_cards(ui, &result);
                    ui.add_space(12.0);
                    self.ui_charts(ui, &result);
                    ui.add_space(12.0);
                    self.ui_summary_paragraph(ui, &result);
                });
        });
    }
}
