//! Example meal layout generation
//!
//! Splits the macro plan across four fixed meal slots and attaches one
//! illustrative food per macro category. Food sampling goes through an
//! injected `Rng` so callers (and tests) control determinism.

use crate::energy::MacroPlan;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The four daily meal slots, in serving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlotKind {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlotKind {
    /// Korean display label, matching the exported plan format
    pub fn label(&self) -> &'static str {
        match self {
            MealSlotKind::Breakfast => "아침",
            MealSlotKind::Lunch => "점심",
            MealSlotKind::Dinner => "저녁",
            MealSlotKind::Snack => "간식",
        }
    }
}

/// Fixed share of daily macros per slot.
///
/// Shares sum to 1.0, but each slot rounds its grams independently, so slot
/// sums may drift slightly from the daily totals. That drift is part of the
/// documented output format and is not corrected.
const MEAL_SPLIT: [(MealSlotKind, f64); 4] = [
    (MealSlotKind::Breakfast, 0.30),
    (MealSlotKind::Lunch, 0.35),
    (MealSlotKind::Dinner, 0.25),
    (MealSlotKind::Snack, 0.10),
];

const PROTEIN_FOODS: &[&str] = &[
    "닭가슴살",
    "계란",
    "연어",
    "소고기 우둔살",
    "두부",
    "그릭요거트",
];

const CARB_FOODS: &[&str] = &["현미밥", "고구마", "오트밀", "통밀빵", "바나나", "감자"];

const FAT_FOODS: &[&str] = &["아몬드", "올리브오일", "아보카도", "호두", "땅콩버터"];

/// One food suggestion per macro category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPicks {
    pub protein: String,
    pub carb: String,
    pub fat: String,
}

/// One meal slot with per-macro gram targets and sampled food examples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlot {
    pub kind: MealSlotKind,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
    pub foods: FoodPicks,
}

/// Ordered daily meal layout plus a guidance note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub slots: Vec<MealSlot>,
    pub note: String,
}

fn sample<R: Rng + ?Sized>(table: &[&str], rng: &mut R) -> String {
    // Tables are non-empty constants, choose cannot return None
    table.choose(rng).copied().unwrap_or_default().to_string()
}

/// Distribute the macro plan across the fixed meal split.
///
/// Grams are rounded half-up per slot, independently of the other slots.
pub fn suggest_meals<R: Rng + ?Sized>(plan: &MacroPlan, rng: &mut R) -> MealPlan {
    let slots = MEAL_SPLIT
        .iter()
        .map(|(kind, share)| MealSlot {
            kind: *kind,
            protein_g: (plan.protein_g * share).round(),
            carb_g: (plan.carb_g * share).round(),
            fat_g: (plan.fat_g * share).round(),
            foods: FoodPicks {
                protein: sample(PROTEIN_FOODS, rng),
                carb: sample(CARB_FOODS, rng),
                fat: sample(FAT_FOODS, rng),
            },
        })
        .collect();

    MealPlan {
        slots,
        note: "식품 예시는 참고용입니다. 같은 매크로 안에서 자유롭게 대체하세요.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn example_plan() -> MacroPlan {
        MacroPlan {
            target_kcal: 2094.3125,
            protein_g: 105.0,
            carb_g: 314.0,
            fat_g: 47.0,
            fat_ratio: 0.20,
            protein_per_kg: 1.5,
        }
    }

    #[test]
    fn test_slot_order_and_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let meals = suggest_meals(&example_plan(), &mut rng);
        let kinds: Vec<_> = meals.slots.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MealSlotKind::Breakfast,
                MealSlotKind::Lunch,
                MealSlotKind::Dinner,
                MealSlotKind::Snack,
            ]
        );
    }

    #[test]
    fn test_breakfast_split_rounds_half_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let meals = suggest_meals(&example_plan(), &mut rng);
        let breakfast = &meals.slots[0];
        // 105 x 0.30 = 31.5 rounds up to 32
        assert_eq!(breakfast.protein_g, 32.0);
        assert_eq!(breakfast.carb_g, 94.0); // 314 x 0.30 = 94.2
        assert_eq!(breakfast.fat_g, 14.0); // 47 x 0.30 = 14.1
    }

    #[test]
    fn test_slot_proportions() {
        let mut rng = StdRng::seed_from_u64(7);
        let meals = suggest_meals(&example_plan(), &mut rng);
        assert_eq!(meals.slots[1].protein_g, 37.0); // lunch 0.35
        assert_eq!(meals.slots[2].protein_g, 26.0); // dinner 0.25
        assert_eq!(meals.slots[3].protein_g, 11.0); // snack 0.10 (10.5 up)
    }

    #[test]
    fn test_independent_rounding_drift_is_accepted() {
        // 32 + 37 + 26 + 11 = 106, one gram over the 105 g total. The drift
        // comes from independent per-slot rounding and stays as-is.
        let mut rng = StdRng::seed_from_u64(7);
        let meals = suggest_meals(&example_plan(), &mut rng);
        let total: f64 = meals.slots.iter().map(|s| s.protein_g).sum();
        assert_eq!(total, 106.0);
    }

    #[test]
    fn test_foods_come_from_tables() {
        let mut rng = StdRng::seed_from_u64(42);
        let meals = suggest_meals(&example_plan(), &mut rng);
        for slot in &meals.slots {
            assert!(PROTEIN_FOODS.contains(&slot.foods.protein.as_str()));
            assert!(CARB_FOODS.contains(&slot.foods.carb.as_str()));
            assert!(FAT_FOODS.contains(&slot.foods.fat.as_str()));
        }
    }

    #[test]
    fn test_sampling_is_deterministic_under_seed() {
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);
        let a = suggest_meals(&example_plan(), &mut rng_a);
        let b = suggest_meals(&example_plan(), &mut rng_b);
        for (sa, sb) in a.slots.iter().zip(&b.slots) {
            assert_eq!(sa.foods.protein, sb.foods.protein);
            assert_eq!(sa.foods.carb, sb.foods.carb);
            assert_eq!(sa.foods.fat, sb.foods.fat);
        }
    }

    #[test]
    fn test_zero_carb_plan() {
        let plan = MacroPlan {
            target_kcal: 1000.0,
            protein_g: 300.0,
            carb_g: 0.0,
            fat_g: 33.0,
            fat_ratio: 0.30,
            protein_per_kg: 2.0,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let meals = suggest_meals(&plan, &mut rng);
        assert!(meals.slots.iter().all(|s| s.carb_g == 0.0));
    }
}
