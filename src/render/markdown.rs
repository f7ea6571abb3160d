use crate::content::ContentPayload;

const RULE: &str = "---\n\n";

pub fn render_markdown(payload: &ContentPayload) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", payload.main_title));
    md.push_str(&format!("> {}\n\n", payload.subtitle));
    md.push_str(RULE);
    md.push_str(&format!("**{}**\n\n", payload.issue_number));

    md.push_str(&format!("## {}\n\n", payload.hero_title));
    md.push_str(&format!("{}\n\n", payload.hero_description));

    md.push_str(RULE);
    md.push_str(&format!("> \"{}\"\n", payload.quote_text));
    md.push_str("> \n");
    md.push_str(&format!("> — {}\n\n", payload.quote_author));

    md.push_str(RULE);
    for section in &payload.sections {
        md.push_str(&format!("## {} {}\n\n", section.icon, section.title));
        md.push_str(&format!("{}\n\n", section.content));
    }

    md.push_str(RULE);
    md.push_str(&format!("### {}\n\n", payload.insight_title));
    md.push_str(&format!("{}\n\n", payload.insight_text));

    if !payload.stats.is_empty() {
        md.push_str(RULE);
        md.push_str("### Key Statistics\n\n");
        for stat in &payload.stats {
            md.push_str(&format!("- **{}**: {}\n", stat.number, stat.label));
        }
        md.push('\n');
    }

    if !payload.family_tips.is_empty() {
        md.push_str(RULE);
        md.push_str("### Practical Tips\n\n");
        for tip in &payload.family_tips {
            md.push_str(&format!("- {}\n", tip));
        }
        md.push('\n');
    }

    md.push_str(RULE);
    md.push_str("**P.S.**\n\n");
    md.push_str(&format!("{}\n", payload.ps_text));

    md
}
