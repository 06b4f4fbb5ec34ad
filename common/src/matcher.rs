//! ベストマッチ選定とスコア表示モデル
//!
//! レスポンス全要素を走査し、各要素のclass_probabilityの最大値が
//! 全体で最も大きい要素をマッチとする。比較は厳密な大小（>）なので
//! 同点の場合は先に現れた要素が勝つ。

use crate::types::ClassificationResult;

/// スコア表の1行
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    /// class_dictionaryのキー（人名）
    pub name: String,
    /// 生のスコア値
    pub score: f64,
    /// 固定小数で整形した表示文字列
    pub display: String,
}

/// マッチ結果の表示モデル
#[derive(Debug, Clone, PartialEq)]
pub struct MatchView {
    /// マッチしたクラスID（表示テンプレートのキー）
    pub class: String,
    /// マッチ要素内の最大確率
    pub best_score: f64,
    /// class_dictionaryに基づく表示行（インデックス昇順）
    pub rows: Vec<ScoreRow>,
}

/// 要素内の最大確率（空列はNone）
fn local_max(probabilities: &[f64]) -> Option<f64> {
    probabilities.iter().copied().reduce(f64::max)
}

/// ベストマッチ走査
///
/// class_probabilityが空の要素は走査に参加しない（中断もしない）。
pub fn best_match(results: &[ClassificationResult]) -> Option<&ClassificationResult> {
    let mut best: Option<(&ClassificationResult, f64)> = None;
    for result in results {
        let Some(score) = local_max(&result.class_probability) else {
            continue;
        };
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((result, score)),
        }
    }
    best.map(|(result, _)| result)
}

/// 固定小数でスコアを整形（precision=2なら 0.9 -> "0.90"）
pub fn format_score(score: f64, precision: usize) -> String {
    format!("{:.*}", precision, score)
}

/// class_dictionaryから表示行を作る
///
/// インデックスがclass_probabilityの範囲外のペアは読み飛ばす。
/// 表示順を安定させるためインデックス昇順に並べる。
pub fn score_rows(result: &ClassificationResult, precision: usize) -> Vec<ScoreRow> {
    let mut pairs: Vec<(&String, &usize)> = result.class_dictionary.iter().collect();
    pairs.sort_by_key(|(_, index)| **index);
    pairs
        .into_iter()
        .filter_map(|(name, &index)| {
            let score = *result.class_probability.get(index)?;
            Some(ScoreRow {
                name: name.clone(),
                score,
                display: format_score(score, precision),
            })
        })
        .collect()
}

/// レスポンス全体を評価して表示モデルを返す
///
/// マッチが存在しない場合（空レスポンス、全要素不正）はNone。
pub fn evaluate(results: &[ClassificationResult], precision: usize) -> Option<MatchView> {
    let matched = best_match(results)?;
    let best_score = local_max(&matched.class_probability)?;
    Some(MatchView {
        class: matched.class.clone(),
        best_score,
        rows: score_rows(matched, precision),
    })
}
