//! Letter grade, stars and a message for a finished session.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub letter: &'static str,
    pub remark: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub grade: Grade,
    pub stars: u8,
    pub message: String,
}

/// Rounded percentage. An empty session counts as 0%.
pub fn percentage(score: u32, max_score: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    let ratio = f64::from(score.min(max_score)) / f64::from(max_score);
    (ratio * 100.0).round() as u32
}

pub fn grade_for(percentage: u32) -> Grade {
    let (letter, remark) = match percentage {
        90.. => ("A+", "Outstanding!"),
        80..=89 => ("A", "Excellent!"),
        70..=79 => ("B+", "Very Good!"),
        60..=69 => ("B", "Good!"),
        50..=59 => ("C", "Keep Practicing!"),
        _ => ("D", "Need More Practice!"),
    };
    Grade { letter, remark }
}

pub fn stars_for(percentage: u32) -> u8 {
    match percentage {
        90.. => 3,
        70..=89 => 2,
        50..=69 => 1,
        _ => 0,
    }
}

pub fn encouragement(percentage: u32, subject: &str) -> String {
    match percentage {
        80.. => format!("Great job! You're mastering {subject}!"),
        60..=79 => "Good effort! Keep practicing to improve!".to_string(),
        _ => "Don't give up! Practice makes perfect!".to_string(),
    }
}

pub fn report(score: u32, max_score: u32, subject: &str) -> GradeReport {
    let percentage = percentage(score, max_score);
    GradeReport {
        score,
        max_score,
        percentage,
        grade: grade_for(percentage),
        stars: stars_for(percentage),
        message: encouragement(percentage, subject),
    }
}
