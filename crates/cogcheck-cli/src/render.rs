//! Console result card.

use cogcheck_core::ScreeningResult;

use crate::share::SharePayload;

/// Print an evaluated result as a vertical card.
pub fn print_result_card(result: &ScreeningResult) {
    println!("=== 認知機能チェック結果 ===");
    println!();
    println!("  スコア      {}点 / {}点", result.score, result.max_score);
    println!("  判定        {}", result.category.label());
    println!("  所見        {}", result.summary);
    if let Some(secs) = result.time_elapsed {
        println!("  所要時間    {}", format_elapsed(secs));
    }
    println!();

    println!("推奨事項");
    for (i, rec) in result.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, rec);
    }
    println!();

    println!("詳細");
    println!("  {}", result.detailed_analysis);
    println!();
    println!("このチェックは医療診断ではありません。気になる症状がある場合は医療機関にご相談ください。");
}

/// Print a decoded share payload.
pub fn print_share_card(payload: &SharePayload) {
    println!("=== 共有された結果 ===");
    println!();
    println!("  スコア      {}点 / {}点", payload.score, payload.max_score);
    println!("  判定        {}", payload.category.label());
    println!("  所見        {}", payload.summary);
    if let Some(secs) = payload.time_elapsed {
        println!("  所要時間    {}", format_elapsed(secs));
    }
    println!("  作成日時    {}", payload.timestamp);
}

fn format_elapsed(seconds: u64) -> String {
    format!("{}分{}秒", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "0分0秒");
        assert_eq!(format_elapsed(59), "0分59秒");
        assert_eq!(format_elapsed(174), "2分54秒");
    }
}
