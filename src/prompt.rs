pub const PERSONA: &str = "You are a senior direct-response copywriter who has written \
campaigns for fast-growing e-commerce and SaaS brands. You write clear, specific, \
benefit-led copy, avoid cliches and filler, and never invent claims about the product \
that are not supported by its description. Return only the requested copy, without \
preamble or commentary.";

pub const FORMATS: &[(&str, &str)] = &[
    (
        "Facebook Ad",
        "Write a Facebook ad with: a scroll-stopping opening line, 2-3 short sentences of \
primary text that lead with the main benefit, a headline of at most 40 characters, and a \
clear call to action. Write 3 variations separated by a line containing only ---.",
    ),
    (
        "Google Ad",
        "Write a Google responsive search ad with 5 headlines of at most 30 characters each \
and 3 descriptions of at most 90 characters each. Include the main keyword naturally and \
end at least one description with a call to action.",
    ),
    (
        "Instagram Caption",
        "Write an Instagram caption with a hook in the first line, a short story or benefit \
in 2-4 lines, a call to action, and 5-8 relevant hashtags on the final line. Use emojis \
sparingly.",
    ),
    (
        "Email",
        "Write a marketing email with 3 subject line options, a preview text of at most 90 \
characters, and a body of 120-180 words that opens with the reader's problem, presents the \
product as the solution, and closes with a single call to action.",
    ),
    (
        "Landing Page",
        "Write landing page copy with a headline, a supporting subheadline, three benefit \
sections each with a short title and 1-2 sentences, one objection-handling paragraph, and \
a call-to-action button label.",
    ),
    (
        "Product Description",
        "Write a product description of 80-120 words for an online store, followed by 4 \
bullet points covering the key features and the benefit each one delivers.",
    ),
    (
        "Twitter Post",
        "Write 3 alternative posts for X (Twitter), each under 280 characters, each with a \
different angle: a bold claim, a question, and a short customer-style testimonial.",
    ),
    (
        "LinkedIn Post",
        "Write a LinkedIn post of 100-150 words in a professional but human tone: open with \
an insight, explain the problem the product solves, and finish with a soft call to action.",
    ),
    (
        "SMS",
        "Write 3 SMS marketing messages, each under 160 characters, with a clear offer or \
reason to act now and a short call to action.",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Direct { prompt: String },
    Copy { format: String, product: String },
}

impl Job {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Direct { .. } => "direct",
            Self::Copy { .. } => "copy",
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Direct { prompt } => prompt.clone(),
            Self::Copy { format, product } => {
                let instruction = instruction_for(format)
                    .map(str::to_string)
                    .unwrap_or_else(|| fallback_instruction(format));
                format!("{PERSONA}\n\n{instruction}\n\nProduct: {product}")
            }
        }
    }
}

pub fn instruction_for(format: &str) -> Option<&'static str> {
    let format = format.trim();
    FORMATS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(format))
        .map(|(_, instruction)| *instruction)
}

fn fallback_instruction(format: &str) -> String {
    format!("Write high-converting {} copy.", format.trim())
}
