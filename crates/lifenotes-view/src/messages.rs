//! Fixed user-facing strings and the class/id contract of the host pages

/// Load failure of a topic category
pub const LOAD_ERROR: &str = "データの読み込み中にエラーが発生しました。";

/// Empty filter result
pub const NO_RESULTS: &str = "条件に合う処世術カードがありません。";

/// Fallback topic title
pub const UNTITLED: &str = "タイトル未設定";

/// Placeholder while a fetch is pending
pub const LOADING: &str = "読み込み中…";

/// Load failure of the pattern catalogue
pub const PATTERN_LOAD_ERROR: &str = "人生パターンの読み込み中にエラーが発生しました。";

/// Load failure of the job directory
pub const JOB_LOAD_ERROR: &str = "職業データの読み込み中にエラーが発生しました。";

/// Load failure of one stage record
#[must_use]
pub fn stage_load_error(path: &str) -> String {
    format!("データを読み込めませんでした。（{path}）")
}

/// Topic detail labels
pub mod topic {
    /// Essence block
    pub const ESSENCE: &str = "本質ポイント";
    /// Traps block
    pub const TRAPS: &str = "よくある罠";
    /// Action tips block
    pub const ACTION_TIPS: &str = "行動ヒント";
}

/// Stage page headings
pub mod stage {
    /// Essence section heading
    pub const CORE_TITLE: &str = "このステージの本質";
    /// Essence section subtitle
    pub const CORE_SUB: &str = "よくある構造・分岐・迷いをざっくり整理しています。";
    /// Common paths heading
    pub const PATHS_TITLE: &str = "よくある分岐パターン";
    /// Pains heading
    pub const PAINS_TITLE: &str = "よくある迷い・不安";
    /// Insights heading
    pub const INSIGHTS_TITLE: &str = "二周目視点 × 処世術";
    /// Insights subtitle
    pub const INSIGHTS_SUB: &str = "一周目でつまずきやすいポイントを、構造ごと整理したメモです。";
    /// Choices heading
    pub const CHOICES_TITLE: &str = "選択のコンパス";
    /// Choices subtitle
    pub const CHOICES_SUB: &str =
        "どちらを選んでもいいが、「何を大事にするか」を意識して選ぶためのメモです。";
    /// Top map heading
    pub const MAP_TITLE: &str = "人生マップ（デモ）";
    /// Top map subtitle
    pub const MAP_SUB: &str = "小学生〜セカンドキャリアまでの流れを、二周目視点でざっくり俯瞰できるマップです。ここから、気になるステージをタブで選んで掘り下げていきます。";
}

/// Pattern card labels
pub mod pattern {
    /// Essence block
    pub const ESSENCE: &str = "このルートの「本質」";
    /// Branches block
    pub const BRANCHES: &str = "よく出てくる分岐";
    /// Pitfalls block
    pub const PAINS: &str = "つまずきやすいポイント";
    /// Prefix of the abstraction line
    pub const ABSTRACT_PREFIX: &str = "抽象化: ";
    /// Prefix of the second-round line
    pub const TWO_ROUND_PREFIX: &str = "二周目視点: ";
    /// Prefix of the action line
    pub const ACTION_PREFIX: &str = "行動ヒント: ";
    /// Header toggle glyph
    pub const TOGGLE_ICON: &str = "›";
}

/// Job card labels
pub mod job {
    /// Prefix of the category line
    pub const CATEGORY_PREFIX: &str = "カテゴリ: ";
    /// Prefix of the examples line
    pub const EXAMPLES_PREFIX: &str = "具体例：";
    /// Overview block
    pub const OVERVIEW: &str = "概要";
    /// Entry route block
    pub const HOW_TO_ENTER: &str = "なり方";
    /// Daily routine block
    pub const ROUTINE: &str = "1日の流れ";
    /// Common worries block
    pub const PAINS: &str = "よくある悩み";
    /// Rewards block
    pub const JOYS: &str = "喜び・やりがい";
}

/// Shared class names projected by state objects
pub mod class {
    /// Open accordion card
    pub const IS_OPEN: &str = "is-open";
    /// Active tab, tag or job button
    pub const IS_ACTIVE: &str = "is-active";
    /// Active stage tab on the generations page
    pub const GEN_TAB_ACTIVE: &str = "gen-tab-active";
    /// Open menu overlay
    pub const OPEN: &str = "open";
}
