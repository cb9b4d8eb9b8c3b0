//! Prompt construction. Pure string building, no I/O.

use std::fmt::Write as _;

use crate::domains::content::models::ContentKind;

use super::types::{BusinessContext, SuggestionHints, SuggestionMode};

/// System instruction for full content generation.
pub const CONTENT_SYSTEM_PROMPT: &str = "You are a professional content writer specializing in SEO and digital marketing.

IMPORTANT: Output ONLY the final content - no explanations, no reasoning, no thinking process, no meta-commentary.

For Twitter posts: Provide only the tweet text with hashtags.
For blog posts: Provide only the article content with headings.
For social media: Provide only the post content.
For emails: Provide only the subject line and email body.

Do not include phrases like:
- \"I need to create...\"
- \"First, I'll...\"
- \"The content should...\"
- \"Here's the content...\"

Just provide the clean, final content that can be used directly.";

/// System instruction for topic and keyword suggestions.
pub const SUGGESTION_SYSTEM_PROMPT: &str = "You are a content marketing and SEO expert.

IMPORTANT: Output ONLY the requested numbered list - no explanations, no reasoning, no meta-commentary.

For topic suggestions: Provide only the numbered list of topics.
For keyword suggestions: Provide only the numbered list of keywords.

Do not include phrases like:
- \"Here are some suggestions...\"
- \"Based on the context...\"
- \"I would recommend...\"

Just provide the clean, numbered list.";

/// Prompt for a full piece of content: business context followed by the
/// instructions for `kind`.
pub fn build_content_prompt(
    business: &BusinessContext,
    kind: ContentKind,
    topic: Option<&str>,
    keywords: &[String],
) -> String {
    let mut prompt = business_context_block(business);
    if !keywords.is_empty() {
        let _ = writeln!(prompt, "- Target Keywords: {}", keywords.join(", "));
    }
    prompt.push('\n');
    prompt.push_str(&content_instructions(kind, non_empty(topic)));
    prompt
}

/// Prompt asking for a bare numbered list of topics or keywords.
pub fn build_suggestion_prompt(
    business: &BusinessContext,
    kind: ContentKind,
    hints: &SuggestionHints,
    mode: SuggestionMode,
) -> String {
    let mut prompt = business_context_block(business);
    let _ = writeln!(prompt, "- Content Type: {}", kind);
    if let Some(category) = non_empty(hints.category.as_deref()) {
        let _ = writeln!(prompt, "- Category: {}", category);
    }
    if let Some(topic) = non_empty(hints.topic.as_deref()) {
        let _ = writeln!(prompt, "- Topic: {}", topic);
    }
    if let Some(description) = non_empty(hints.description.as_deref()) {
        let _ = writeln!(prompt, "- Additional Context: {}", description);
    }
    prompt.push('\n');

    let limit = mode.limit();
    let requirements = match mode {
        SuggestionMode::Topics => format!(
            "Generate {limit} engaging and relevant topic suggestions for the above context.

Requirements:
- Topics should be specific and actionable
- Match the content type format (blog post = longer topics, social media = shorter/catchier)
- Be relevant to the business and industry
- Include variety in angles and approaches
- Make them engaging and click-worthy
"
        ),
        SuggestionMode::Keywords => format!(
            "Generate {limit} relevant SEO keywords/phrases for the above context.

Requirements:
- Mix of short-tail (1-2 words) and long-tail (3-5 words) keywords
- Include industry-specific terms
- Consider search intent and relevance
- Include business/brand-related keywords
- Avoid duplicates
- Focus on keywords that would help this content rank well
"
        ),
    };
    prompt.push_str(&requirements);

    let _ = writeln!(
        prompt,
        "\nReturn ONLY a simple numbered list of {} {}, nothing else:",
        limit,
        mode.noun()
    );
    for n in 1..=limit {
        let _ = writeln!(prompt, "{}. [{}]", n, item_placeholder(mode, n));
    }
    prompt.push_str("\nOutput nothing but the numbered list.");
    prompt
}

fn business_context_block(business: &BusinessContext) -> String {
    let mut block = String::from("Business Context:\n");
    let _ = writeln!(block, "- Company: {}", business.name);
    let _ = writeln!(
        block,
        "- Industry: {}",
        or_default(&business.industry, "Not specified")
    );
    let _ = writeln!(
        block,
        "- Description: {}",
        or_default(&business.description, "Not specified")
    );
    let _ = writeln!(
        block,
        "- Target Audience: {}",
        or_default(&business.target_audience, "General audience")
    );
    let _ = writeln!(
        block,
        "- Brand Voice: {}",
        or_default(&business.brand_voice, "Professional and engaging")
    );
    let _ = writeln!(
        block,
        "- Website: {}",
        or_default(&business.website, "Not specified")
    );
    block
}

fn content_instructions(kind: ContentKind, topic: Option<&str>) -> String {
    let (opening, no_topic, requirements) = match kind {
        ContentKind::BlogPost => (
            "Write a comprehensive blog post for this business.",
            "Choose an engaging topic relevant to their industry.",
            "- 1000-1500 words
- SEO optimized with target keywords naturally integrated
- Include engaging headline and meta description
- Structure with clear headings and subheadings
- Professional tone matching the brand voice
- Include actionable insights for the target audience
- End with a call-to-action

Format as markdown with proper headings.",
        ),
        ContentKind::LinkedinPost => (
            "Create a LinkedIn post for this business.",
            "Choose a topic that showcases industry expertise.",
            "- 200-300 words maximum
- Professional tone suitable for LinkedIn
- Include relevant hashtags (3-5)
- Encourage engagement with a question or call-to-action
- Match the brand voice
- Share valuable insights or industry knowledge",
        ),
        ContentKind::TwitterPost => (
            "Create a Twitter/X post for this business.",
            "Choose a trending or relevant topic.",
            "- Under 280 characters
- Include 1-3 relevant hashtags
- Engaging and shareable
- Match the brand voice
- Include a clear call-to-action if appropriate",
        ),
        ContentKind::FacebookPost => (
            "Create a Facebook post for this business.",
            "Choose an engaging topic for Facebook audience.",
            "- 100-200 words
- Conversational and engaging tone
- Include call-to-action
- Suitable for Facebook audience
- Match the brand voice
- Encourage likes, comments, and shares",
        ),
        ContentKind::InstagramPost => (
            "Create an Instagram post caption for this business.",
            "Choose a visually appealing topic.",
            "- 150-300 words
- Instagram-friendly tone (casual but professional)
- Include relevant hashtags (8-15)
- Engaging caption that complements visual content
- Call-to-action appropriate for Instagram
- Match the brand voice",
        ),
        ContentKind::RedditPost => (
            "Create a Reddit post for this business.",
            "Choose a discussion topic a relevant subreddit would value.",
            "- A descriptive title on the first line, then the post body
- 200-400 words
- Authentic, community-first tone with no hard selling
- No hashtags
- Lead with useful information or a genuine question
- Invite discussion in the comments",
        ),
        ContentKind::QuoraPost => (
            "Write a Quora answer for this business.",
            "Choose a common question their target audience asks.",
            "- Restate the question on the first line
- 300-600 words
- Expert, helpful tone that answers the question directly
- Support claims with concrete examples
- Mention the business only where it genuinely helps the reader
- No hashtags",
        ),
        ContentKind::Email => (
            "Write a marketing email for this business.",
            "Choose a timely offer or update for their audience.",
            "- Subject line on the first line, under 60 characters
- 150-300 word body
- Personal greeting and scannable short paragraphs
- Match the brand voice
- One clear call-to-action
- Friendly sign-off from the business",
        ),
        ContentKind::AdCopy => (
            "Write advertising copy for this business.",
            "Choose the strongest selling point for their audience.",
            "- Headline on the first line, under 40 characters
- Body under 125 characters
- Lead with a benefit, not a feature
- Match the brand voice
- End with a short, action-oriented call-to-action
- No hashtags",
        ),
    };

    let topic_line = match topic {
        Some(topic) => format!("Topic: {}", topic),
        None => no_topic.to_string(),
    };

    format!("{opening}\n{topic_line}\n\nRequirements:\n{requirements}\n")
}

fn item_placeholder(mode: SuggestionMode, n: usize) -> String {
    match mode {
        SuggestionMode::Topics => format!("Topic {}", n),
        SuggestionMode::Keywords => format!("keyword {}", n),
    }
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    non_empty(value.as_deref()).unwrap_or(default)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
