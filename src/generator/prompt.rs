pub const PREAMBLE: &str =
    "You are a professional newsletter writer who answers only with JSON documents.";

pub const RESPONSE_SHAPE: &str = r#"{
  "mainTitle": "Main title",
  "subtitle": "Subtitle (one-line description)",
  "issueNumber": "ISSUE #001 | October 2025",
  "heroLabel": "This week's key topic",
  "heroTitle": "Hero section title",
  "heroDescription": "Hero section description",
  "quoteText": "An inspiring quote",
  "quoteAuthor": "Source of the quote",
  "sections": [
    {
      "title": "Subtopic 1 title",
      "icon": "emoji",
      "summary": "Short summary (under 100 characters)",
      "content": "Detailed content (about 2000 characters)"
    }
  ],
  "insightTitle": "Insight title",
  "insightText": "Insight text",
  "stats": [
    {"number": "40%", "label": "Stat label"},
    {"number": "7 hours", "label": "Stat label"},
    {"number": "150 minutes", "label": "Stat label"}
  ],
  "ctaTitle": "Call to action title",
  "ctaButton": "Button text",
  "familyTips": [
    "Tip 1",
    "Tip 2",
    "Tip 3",
    "Tip 4"
  ],
  "psText": "Postscript text"
}"#;

pub fn build_content_prompt(topic: &str, language: &str) -> String {
    let language = match language.trim() {
        "" => "English",
        other => other,
    };

    format!(
        r#"You are a professional newsletter writer.
Topic: {topic}

Write the newsletter content to the following requirements:

1. Organise the topic (H1) into 5 subtopics (H2).
2. Write each subtopic so that it follows the overall flow of the issue.
3. Each subtopic body should be about 2000 characters long.
4. The whole newsletter must not exceed 12000 characters.
5. Write all content in {language}.

Response format (provide exactly 5 sections, exactly 3 stats):
{shape}

Respond with JSON only."#,
        topic = topic.trim(),
        language = language,
        shape = RESPONSE_SHAPE,
    )
}
