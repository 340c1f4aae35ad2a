//! Generations page: stage records and the static life map

use crate::element::Element;
use crate::messages::stage as text;
use lifenotes_content::StageRecord;

/// Dot style of a life-map stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dot {
    Plain,
    Mid,
    End,
}

const MAP_ROWS: [[(&str, &str, Dot); 4]; 2] = [
    [
        ("小学生", "「世界のルール」を初めて知る時期", Dot::Plain),
        ("中学生", "比較と序列が意識に入り込む", Dot::Plain),
        ("高校生", "「将来何者になるか」問題が立ち上がる", Dot::Plain),
        ("大学・専門期", "選択の幅が一時的に最大になる", Dot::Mid),
    ],
    [
        ("社会人前期", "実戦で「自分のパターン」を知るフェーズ", Dot::Mid),
        ("社会人中期", "責任と自由のバランスが重くなる", Dot::Mid),
        ("社会人後期", "守るものと手放すものを選び始める", Dot::Plain),
        ("セカンドキャリア", "「何を残すか」のフェーズ", Dot::End),
    ],
];

const PHASES: [(&str, &str); 4] = [
    (
        "① 成長のフェーズ",
        "小〜高校は、「自分が選べない前提」が多い時期。二周目視点では、自分を責めるより「環境の構造」を理解することが大事になります。",
    ),
    (
        "② 選択が増えるフェーズ",
        "大学・専門期〜社会人前期は、選択肢が一気に増える一方で、「本当に選び直せる期限」も同時に進んでいきます。",
    ),
    (
        "③ 仕事の重みが増すフェーズ",
        "社会人中期〜後期は、役割と責任が増え、自分だけの問題ではなくなることで判断が難しくなります。",
    ),
    (
        "④ 自由度が再び高まるフェーズ",
        "セカンドキャリアは、「もう一度人生を再設計する」タイミング。一周目の経験を、二周目の自由さに変換していくステージです。",
    ),
];

/// Static overview shown on the `top` tab; never fetched
#[must_use]
pub fn top_view() -> Element {
    let rows = MAP_ROWS.iter().map(|row| {
        Element::new("div")
            .with_class("gen-map-stage-row")
            .with_children(row.iter().map(|(label, note, dot)| {
                let dot_class = match dot {
                    Dot::Plain => "gen-map-dot",
                    Dot::Mid => "gen-map-dot gen-map-dot--mid",
                    Dot::End => "gen-map-dot gen-map-dot--end",
                };
                Element::new("div")
                    .with_class("gen-map-stage")
                    .with_child(Element::new("div").with_class(dot_class))
                    .with_child(Element::new("div").with_class("gen-map-stage-label").with_text(*label))
                    .with_child(Element::new("div").with_class("gen-map-stage-note").with_text(*note))
            }))
    });

    let phases = Element::new("div")
        .with_class("gen-map-phases")
        .with_children(PHASES.iter().map(|(title, body)| {
            Element::new("div")
                .with_class("gen-phase-card")
                .with_child(Element::new("h3").with_class("gen-phase-title").with_text(*title))
                .with_child(Element::new("p").with_class("gen-phase-text").with_text(*body))
        }));

    Element::new("div")
        .with_class("gen-card")
        .with_child(
            Element::new("div")
                .with_class("gen-map-header")
                .with_child(Element::new("h2").with_class("gen-map-title").with_text(text::MAP_TITLE))
                .with_child(Element::new("p").with_class("gen-map-sub").with_text(text::MAP_SUB)),
        )
        .with_child(
            Element::new("div")
                .with_class("gen-map-timeline")
                .with_child(Element::new("div").with_class("gen-map-line"))
                .with_children(rows)
                .with_child(phases),
        )
}

fn section_heading(title: &str, sub: &str) -> [Element; 2] {
    [
        Element::new("h3").with_class("gen-section-title").with_text(title),
        Element::new("p").with_class("gen-section-sub").with_text(sub),
    ]
}

/// A stage record in its 7-part layout
///
/// Header (title, overview, essence pills), branching paths and pains,
/// insights, choices, final line. Missing fields render as blank sections.
#[must_use]
pub fn stage_view(record: &StageRecord) -> Element {
    let header = Element::new("div")
        .with_class("gen-card gen-stage-header")
        .with_child(Element::new("h2").with_class("gen-stage-title").with_text(record.title.as_str()))
        .with_child(
            Element::new("p")
                .with_class("gen-stage-overview")
                .with_text(record.overview.as_str()),
        )
        .with_child(
            Element::new("div").with_class("gen-tag-row").with_children(
                record
                    .essence
                    .iter()
                    .map(|e| Element::new("span").with_class("gen-tag-pill").with_text(e.as_str())),
            ),
        );

    let core = Element::new("div")
        .with_class("gen-card")
        .with_children(section_heading(text::CORE_TITLE, text::CORE_SUB))
        .with_child(Element::new("h4").with_class("gen-section-title").with_text(text::PATHS_TITLE))
        .with_child(
            Element::new("ul")
                .with_class("gen-list gen-paths")
                .with_children(record.common_paths.iter().map(|p| {
                    Element::new("li")
                        .with_child(
                            Element::new("span")
                                .with_class("gen-inline-label")
                                .with_text(p.label.as_str()),
                        )
                        .with_text(format!("：{}", p.desc))
                })),
        )
        .with_child(Element::new("h4").with_class("gen-section-title").with_text(text::PAINS_TITLE))
        .with_child(
            Element::new("ul")
                .with_class("gen-list gen-pains")
                .with_children(record.pains.iter().map(|p| Element::new("li").with_text(p.as_str()))),
        );

    let insights = Element::new("div")
        .with_class("gen-card")
        .with_children(section_heading(text::INSIGHTS_TITLE, text::INSIGHTS_SUB))
        .with_child(Element::new("div").with_children(record.insights.iter().map(|ins| {
            Element::new("div")
                .with_class("gen-insight-item")
                .with_child(Element::new("p").with_class("gen-insight-title").with_text(ins.title.as_str()))
                .with_child(
                    Element::new("p")
                        .with_class("gen-insight-abstract")
                        .with_text(ins.abstraction.as_str()),
                )
                .with_child(Element::new("p").with_class("gen-insight-action").with_text(ins.action.as_str()))
        })));

    let choices = Element::new("div")
        .with_class("gen-card")
        .with_children(section_heading(text::CHOICES_TITLE, text::CHOICES_SUB))
        .with_child(Element::new("div").with_children(record.choices.iter().map(|ch| {
            Element::new("div")
                .with_class("gen-choice-item")
                .with_child(Element::new("p").with_class("gen-choice-title").with_text(ch.title.as_str()))
                .with_child(Element::new("p").with_class("gen-choice-text").with_text(ch.insight.as_str()))
        })));

    let final_line = Element::new("div").with_class("gen-card").with_child(
        Element::new("p")
            .with_class("gen-final-line")
            .with_text(record.final_line.as_str()),
    );

    Element::new("div")
        .with_class("gen-stage-wrapper")
        .with_children([header, core, insights, choices, final_line])
}
