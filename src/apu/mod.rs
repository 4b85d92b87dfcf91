//! APU(보조 동력 장치) 도입 경제성 모델.

pub mod narrative;
pub mod savings;

pub use narrative::{format_currency, strip_markup, summary_paragraph};
pub use savings::{compute_savings, CumulativeSavingsPoint, SavingsInput, SavingsResult};
