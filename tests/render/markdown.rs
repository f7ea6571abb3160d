#[path = "../common/mod.rs"]
mod common;

use common::{sample_payload, section};
use newsdesk::render::render_markdown;

#[test]
fn renders_full_document() {
    let mut payload = sample_payload();
    payload.sections = vec![section(1)];
    payload.stats.truncate(1);
    payload.family_tips.truncate(1);

    let md = render_markdown(&payload);

    let expected = "# Brain Health Weekly\n\n\
> Small habits for a sharper mind\n\n\
---\n\n\
**ISSUE #042 | March 2026**\n\n\
## Sleep is<br>brain maintenance\n\n\
Why deep sleep matters more than you think.\n\n\
---\n\n\
> \"Rest is not idleness.\"\n\
> \n\
> — John Lubbock\n\n\
---\n\n\
## icon-1 Section title 1\n\n\
Section body 1\n\n\
---\n\n\
### Research insight\n\n\
Walking daily correlates with larger hippocampal volume.\n\n\
---\n\n\
### Key Statistics\n\n\
- **10%**: Stat label 1\n\n\
---\n\n\
### Practical Tips\n\n\
- Walk after dinner\n\n\
---\n\n\
**P.S.**\n\n\
Next week: memory games.\n";
    assert_eq!(md, expected);
}

#[test]
fn every_section_appears_once_in_order() {
    let md = render_markdown(&sample_payload());

    let mut last = 0;
    for n in 1..=5 {
        let title = format!("Section title {n}");
        let body = format!("Section body {n}");
        assert_eq!(md.matches(&title).count(), 1, "{title}");
        assert_eq!(md.matches(&body).count(), 1, "{body}");

        let at = md.find(&format!("## icon-{n} {title}")).expect("heading present");
        assert!(at > last, "{title} out of order");
        assert!(md.find(&body).unwrap() > at);
        last = at;
    }
}

#[test]
fn omits_stats_block_iff_empty() {
    let mut payload = sample_payload();
    assert!(render_markdown(&payload).contains("### Key Statistics"));

    payload.stats.truncate(2);
    let md = render_markdown(&payload);
    assert!(md.contains("### Key Statistics"));
    assert!(md.contains("- **20%**: Stat label 2\n"));

    payload.stats.clear();
    assert!(!render_markdown(&payload).contains("### Key Statistics"));
}

#[test]
fn omits_tips_block_iff_empty() {
    let mut payload = sample_payload();
    let md = render_markdown(&payload);
    assert!(md.contains("### Practical Tips\n\n- Walk after dinner\n- Read aloud together\n"));

    payload.family_tips.clear();
    assert!(!render_markdown(&payload).contains("### Practical Tips"));
}

#[test]
fn is_deterministic() {
    let payload = sample_payload();

    assert_eq!(render_markdown(&payload), render_markdown(&payload));
}
