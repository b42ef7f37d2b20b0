//! Weekly training routine templates
//!
//! Pure table lookup: the requested weight-training frequency picks one of two
//! canned weekly templates, and the goal picks the cardio recommendation
//! appended as the final row.

use crate::types::Goal;
use serde::{Deserialize, Serialize};

/// Frequencies at or above this get the 5-day body-part split
const SPLIT_THRESHOLD_DAYS: u8 = 4;

/// One row of the weekly routine: a day label plus its session description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingSession {
    pub day: String,
    pub routine: String,
}

/// Ordered weekly routine; the last row is always the cardio recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub sessions: Vec<TrainingSession>,
}

const FIVE_DAY_SPLIT: [(&str, &str); 5] = [
    ("월", "가슴 + 삼두 (벤치프레스, 인클라인 덤벨프레스, 딥스)"),
    ("화", "등 + 이두 (데드리프트, 랫풀다운, 바벨로우)"),
    ("수", "하체 (스쿼트, 레그프레스, 런지)"),
    ("목", "어깨 + 복근 (오버헤드프레스, 사이드 레터럴 레이즈)"),
    ("금", "전신 보조 + 약점 보완"),
];

const TWO_DAY_FULL_BODY: [(&str, &str); 2] = [
    ("1일차", "전신 A (스쿼트, 벤치프레스, 바벨로우)"),
    ("2일차", "전신 B (데드리프트, 오버헤드프레스, 랫풀다운)"),
];

fn cardio_recommendation(goal: Goal) -> &'static str {
    match goal {
        Goal::Cut => "주 3-4회 30-40분 중강도 (빠르게 걷기, 사이클)",
        Goal::Maintain => "주 2-3회 20-30분 자유 강도",
        Goal::Bulk => "주 1-2회 20분 저강도 (컨디셔닝 유지 목적)",
    }
}

/// Build the weekly routine for the requested frequency and goal
pub fn training_plan(goal: Goal, days_per_week: u8) -> TrainingPlan {
    let template: &[(&str, &str)] = if days_per_week >= SPLIT_THRESHOLD_DAYS {
        &FIVE_DAY_SPLIT
    } else {
        &TWO_DAY_FULL_BODY
    };

    let mut sessions: Vec<TrainingSession> = template
        .iter()
        .map(|(day, routine)| TrainingSession {
            day: (*day).to_string(),
            routine: (*routine).to_string(),
        })
        .collect();

    sessions.push(TrainingSession {
        day: "유산소".to_string(),
        routine: cardio_recommendation(goal).to_string(),
    });

    TrainingPlan { sessions }
}
