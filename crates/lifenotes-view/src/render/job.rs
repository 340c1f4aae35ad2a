//! Job directory: tag buttons and the active job card

use crate::element::Element;
use crate::messages::{class, job as label};
use lifenotes_content::JobRecord;

/// One tag button per job; the active one carries `is-active`
#[must_use]
pub fn job_tag_buttons(jobs: &[JobRecord], active: Option<&str>) -> Vec<Element> {
    jobs.iter()
        .map(|job| {
            let mut button = Element::new("button")
                .with_class("job-tag-button")
                .with_attr("type", "button")
                .with_attr("data-job-id", job.id.as_str())
                .with_text(job.name.as_str());
            button.toggle_class(class::IS_ACTIVE, active == Some(job.id.as_str()));
            button
        })
        .collect()
}

fn job_list_block(title: &str, items: &[String]) -> Element {
    Element::new("div")
        .with_class("job-detail-block")
        .with_child(Element::new("h4").with_class("job-detail-title").with_text(title))
        .with_child(
            Element::new("ul")
                .with_class("job-detail-list")
                .with_children(items.iter().map(|item| Element::new("li").with_text(item.as_str()))),
        )
}

/// Detail card of one job
#[must_use]
pub fn job_card(job: &JobRecord) -> Element {
    let category = if job.category.is_empty() {
        String::new()
    } else {
        format!("{}{}", label::CATEGORY_PREFIX, job.category)
    };

    let mut examples = Element::new("p").with_class("job-card-examples");
    if !job.examples.is_empty() {
        examples = examples
            .with_child(Element::new("span").with_text(label::EXAMPLES_PREFIX))
            .with_text(job.examples.as_str());
    }

    let mut card = Element::new("article").with_class("job-card").with_child(
        Element::new("div")
            .with_class("job-card-header")
            .with_child(Element::new("h3").with_class("job-card-title").with_text(job.name.as_str()))
            .with_child(Element::new("p").with_class("job-card-category").with_text(category))
            .with_child(examples),
    );

    if !job.overview.is_empty() {
        card.push(
            Element::new("div")
                .with_class("job-detail-block")
                .with_child(Element::new("h4").with_class("job-detail-title").with_text(label::OVERVIEW))
                .with_child(
                    Element::new("p")
                        .with_class("job-detail-text")
                        .with_text(job.overview.as_str()),
                ),
        );
    }

    for (title, items) in [
        (label::HOW_TO_ENTER, &job.how_to_enter),
        (label::ROUTINE, &job.routine),
        (label::PAINS, &job.pains),
        (label::JOYS, &job.joys),
    ] {
        if !items.is_empty() {
            card.push(job_list_block(title, items));
        }
    }

    if !job.two_round_view.is_empty() {
        card.push(
            Element::new("div")
                .with_class("job-two-round-view")
                .with_text(job.two_round_view.as_str()),
        );
    }

    card
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, name: &str) -> JobRecord {
        JobRecord {
            id: id.into(),
            name: name.into(),
            ..JobRecord::default()
        }
    }

    #[test]
    fn only_active_button_is_marked() {
        let jobs = vec![job("nurse", "Nurse"), job("chef", "Chef")];
        let buttons = job_tag_buttons(&jobs, Some("chef"));
        assert!(!buttons[0].has_class("is-active"));
        assert!(buttons[1].has_class("is-active"));
        assert_eq!(buttons[1].attr("data-job-id"), Some("chef"));
    }

    #[test]
    fn minimal_job_renders_header_only() {
        let card = job_card(&job("x", "X"));
        assert_eq!(card.child_elements().count(), 1);
        assert_eq!(card.find_by_class("job-card-category").unwrap().text_content(), "");
        assert_eq!(card.find_by_class("job-card-examples").unwrap().text_content(), "");
    }

    #[test]
    fn full_job_renders_all_blocks() {
        let record = JobRecord {
            category: "care".into(),
            examples: "clinic".into(),
            overview: "o".into(),
            how_to_enter: vec!["school".into()],
            joys: vec!["thanks".into()],
            two_round_view: "v".into(),
            ..job("nurse", "Nurse")
        };
        let card = job_card(&record);
        assert_eq!(card.find_all_by_class("job-detail-block").len(), 3);
        assert_eq!(
            card.find_by_class("job-card-category").unwrap().text_content(),
            "カテゴリ: care"
        );
        assert_eq!(
            card.find_by_class("job-card-examples").unwrap().text_content(),
            "具体例：clinic"
        );
        assert!(card.find_by_class("job-two-round-view").is_some());
    }
}
