//! Deterministic content used when no live backend can answer.
//!
//! Nothing here can fail; every content kind has copy.

use crate::domains::content::models::ContentKind;

use super::types::BusinessContext;

/// Hand-written sample copy for `kind`.
pub fn offline_content(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::BlogPost => BLOG_POST,
        ContentKind::LinkedinPost => LINKEDIN_POST,
        ContentKind::TwitterPost => TWITTER_POST,
        ContentKind::FacebookPost => FACEBOOK_POST,
        ContentKind::InstagramPost => INSTAGRAM_POST,
        ContentKind::RedditPost => REDDIT_POST,
        ContentKind::QuoraPost => QUORA_POST,
        ContentKind::Email => EMAIL,
        ContentKind::AdCopy => AD_COPY,
    }
}

pub fn fallback_topics(business: &BusinessContext) -> Vec<String> {
    let industry = industry_label(business);
    let name = &business.name;
    vec![
        format!("5 Essential {industry} Tips for Beginners"),
        format!("How {name} is Transforming the {industry} Industry"),
        format!("The Future of {industry}: Trends to Watch"),
        format!("Common {industry} Mistakes and How to Avoid Them"),
        format!("Why Choose {name} for Your {industry} Needs"),
    ]
}

pub fn fallback_keywords(business: &BusinessContext) -> Vec<String> {
    let industry = industry_label(business).to_lowercase();
    let name = business.name.to_lowercase();
    vec![
        industry.clone(),
        name.clone(),
        format!("{industry} services"),
        format!("{industry} tips"),
        "professional".to_string(),
        format!("{industry} solutions"),
        format!("best {industry}"),
        format!("{industry} expert"),
        format!("{industry} guide"),
        format!("{name} {industry}"),
    ]
}

fn industry_label(business: &BusinessContext) -> &str {
    business
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or("business")
}

const BLOG_POST: &str = "# The Future of Digital Marketing: Trends to Watch in 2024

Digital marketing continues to evolve at a rapid pace, and businesses that want to stay competitive must adapt to the latest trends and technologies. In this comprehensive guide, we'll explore the key trends shaping the digital marketing landscape in 2024.

## 1. AI-Powered Personalization

Artificial intelligence is revolutionizing how businesses interact with their customers. By leveraging AI algorithms, companies can now deliver highly personalized experiences at scale.

## 2. Voice Search Optimization

With the growing popularity of voice assistants, optimizing for voice search has become crucial for businesses looking to maintain their online visibility.

## 3. Interactive Content

Interactive content such as polls, quizzes, and augmented reality experiences are becoming increasingly important for engaging modern audiences.

## Conclusion

The digital marketing landscape continues to evolve, and businesses must stay ahead of these trends to remain competitive. By embracing AI, optimizing for voice search, and creating interactive content, your business can thrive in the digital age.

Ready to transform your digital marketing strategy? Contact us today to learn how we can help your business succeed online.";

const LINKEDIN_POST: &str = "🚀 The digital marketing landscape is evolving faster than ever!

As we move into 2024, three key trends are reshaping how businesses connect with their audiences:

✅ AI-powered personalization is enabling hyper-targeted campaigns
✅ Voice search optimization is becoming essential for visibility
✅ Interactive content is driving unprecedented engagement rates

Companies that embrace these trends early will have a significant competitive advantage.

What digital marketing trend are you most excited about? Share your thoughts below! 👇

#DigitalMarketing #AI #Innovation #MarketingTrends #BusinessGrowth";

const TWITTER_POST: &str = "🔥 AI is transforming digital marketing in 2024! From personalized campaigns to voice search optimization, businesses are seeing incredible results. What's your favorite AI marketing tool? #AIMarketing #DigitalTransformation #MarketingTech";

const FACEBOOK_POST: &str = "Did you know that 75% of consumers expect personalized experiences from brands? 🎯

The future of marketing is here, and it's powered by AI! Businesses using artificial intelligence for personalization are seeing:

• 20% increase in customer satisfaction
• 15% boost in conversion rates
• 30% improvement in customer retention

Ready to join the AI revolution? We're here to help you transform your marketing strategy and deliver the personalized experiences your customers crave.

What questions do you have about AI in marketing? Drop them in the comments! 👇";

const INSTAGRAM_POST: &str = "✨ Marketing magic happens when technology meets creativity!

We're obsessed with how AI is transforming the way brands connect with their audience. From personalized content to predictive analytics, the possibilities are endless!

Swipe to see our favorite AI marketing tools that are changing the game in 2024 ➡️

Which one would you try first? Tell us in the comments!

#AIMarketing #DigitalInnovation #MarketingTech #BusinessGrowth #ContentStrategy #MarketingTips #TechTrends #AITools #DigitalTransformation #MarketingMagic #Innovation #FutureOfMarketing #BusinessSuccess #ContentCreation #MarketingStrategy";

const REDDIT_POST: &str = "What small-business marketing experiments actually paid off for you this year?

We run a small team and spent the last few months testing a handful of ideas: personalized follow-up emails, short how-to videos, and answering customer questions publicly instead of in private messages.

The follow-up emails were the clear winner. Replies went up noticeably once each message referenced what the customer had actually asked about. The videos took far more time than expected for modest results.

Not selling anything here, genuinely curious what has worked for others. What would you try first with a limited budget?";

const QUORA_POST: &str = "How can a small business use AI in its marketing without a big budget?

Start with the work you already do every week rather than new projects.

Most small businesses spend hours drafting social posts, replying to common customer questions, and summarizing feedback. AI writing assistants handle first drafts of all three well, and a person can review and adjust them in minutes.

A practical order to adopt them:

1. Draft recurring social posts from a short list of talking points.
2. Build a reply library for the ten questions customers ask most.
3. Summarize reviews monthly to spot what customers value.

Measure each step for a month before adding the next. The goal is saved time you can reinvest in talking to customers, not replacing that conversation.";

const EMAIL: &str = "Subject: Three marketing trends worth your attention this quarter

Hi there,

Marketing keeps changing, and we want to make sure you hear about what matters before your competitors do.

Here are three trends we're helping clients act on right now:

- Personalized messages that reflect what each customer actually cares about
- Content written to answer voice-search questions
- Interactive posts like polls and quizzes that invite a response

Each one can be started small and measured quickly.

Want to see how they would work for your business? Reply to this email and we'll set up a short call.

Best regards,
The Team";

const AD_COPY: &str = "Grow Faster With Smarter Marketing

Personalized campaigns that reach the right customers at the right time. Start your free consultation today.";
