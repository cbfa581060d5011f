//! Statement document: plain-text sentences, headed sections and samples

use once_cell::sync::Lazy;
use regex::Regex;
use crate::prediction::evidence::SampleError;

static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("valid regex")
});
/// A `<` only opens a tag when a name, `/` or `!` follows it directly, so
/// text such as `1 < N` survives.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z!][^<>]*>").expect("valid regex"));
static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("valid regex"));
static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<section\b[^>]*>(.*?)</section\s*>").expect("valid regex"));
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h3\b[^>]*>(.*?)</h3\s*>").expect("valid regex"));
static PARAGRAPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("valid regex"));
static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li\s*>").expect("valid regex"));
static PRE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<pre\b[^>]*>(.*?)</pre\s*>").expect("valid regex"));

/// Remove tags and decode entities, keeping line breaks
pub fn markup_to_text(markup: &str) -> String {
    let without_scripts = SCRIPT_RE.replace_all(markup, "");
    let without_tags = TAG_RE.replace_all(&without_scripts, "");
    decode_entities(&without_tags)
}

fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures| {
            let name = &caps[1];
            let hex = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"));
            let decoded = if let Some(hex) = hex {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match name {
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "amp" => Some('&'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some('\u{a0}'),
                    _ => None,
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

/// Hiragana, katakana and CJK unified ideographs
pub fn is_japanese(ch: char) -> bool {
    matches!(ch,
        '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{20000}'..='\u{2A6DF}'
    )
}

/// Heading text with every non-Japanese character discarded
pub fn japanese_only(text: &str) -> String {
    text.chars().filter(|c| is_japanese(*c)).collect()
}

/// A `<section>` element with an `<h3>` heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    body: String,
}

impl Section {
    /// Title reduced to Japanese characters, for prefix comparisons
    pub fn japanese_title(&self) -> String {
        japanese_only(&self.title)
    }

    /// Plain text of each `<p>` in the section
    pub fn paragraphs(&self) -> Vec<String> {
        Self::collect(&PARAGRAPH_RE, &self.body)
    }

    /// Plain text of each `<li>` in the section
    pub fn list_items(&self) -> Vec<String> {
        Self::collect(&LIST_ITEM_RE, &self.body)
    }

    /// Plain text of the first `<pre>` block
    pub fn preformatted(&self) -> Option<String> {
        PRE_RE.captures(&self.body).map(|caps| markup_to_text(&caps[1]))
    }

    fn collect(re: &Regex, body: &str) -> Vec<String> {
        re.captures_iter(body)
            .map(|caps| markup_to_text(&caps[1]))
            .collect()
    }
}

/// One declared input/output example pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleRole {
    Input,
    Output,
}

fn sample_role(section: &Section) -> Option<SampleRole> {
    let ja = section.japanese_title();
    let en = section.title.trim().to_lowercase();
    if ja.starts_with("入力例") || en.starts_with("sample input") {
        Some(SampleRole::Input)
    } else if ja.starts_with("出力例") || en.starts_with("sample output") {
        Some(SampleRole::Output)
    } else {
        None
    }
}

/// Parsed, immutable problem statement shared by every classifier
#[derive(Debug, Clone, Default)]
pub struct Statement {
    sentences: Vec<String>,
    sections: Vec<Section>,
}

impl Statement {
    pub fn parse(html: &str) -> Self {
        let sentences = markup_to_text(html)
            .split('\n')
            .map(|s| s.to_string())
            .collect();

        let sections = SECTION_RE
            .captures_iter(html)
            .filter_map(|caps| {
                let body = caps[1].to_string();
                let title = HEADING_RE.captures(&body).map(|h| markup_to_text(&h[1]))?;
                Some(Section { title, body })
            })
            .collect();

        Self { sentences, sections }
    }

    /// Candidate sentences, one per text line
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Declared examples in document order
    pub fn samples(&self) -> Result<Vec<Sample>, SampleError> {
        let mut inputs = Vec::new();
        let mut outputs = Vec::new();

        for section in &self.sections {
            let Some(role) = sample_role(section) else {
                continue;
            };
            let text = section.preformatted().ok_or_else(|| SampleError::FormatNotRecognized {
                reason: format!("example section '{}' has no <pre> block", section.title.trim()),
            })?;
            match role {
                SampleRole::Input => inputs.push(text),
                SampleRole::Output => outputs.push(text),
            }
        }

        if outputs.is_empty() {
            return Err(SampleError::NoSamplesFound);
        }
        if inputs.len() != outputs.len() {
            return Err(SampleError::FormatNotRecognized {
                reason: format!(
                    "{} input examples but {} output examples",
                    inputs.len(),
                    outputs.len()
                ),
            });
        }

        Ok(inputs
            .into_iter()
            .zip(outputs)
            .map(|(input, output)| Sample { input, output })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATEMENT: &str = r#"<html><head><style>p { color: red; }</style></head><body>
<div class="part"><section><h3>問題文</h3><p>整数 <var>N</var> が与えられます。</p>
<p>答えを <var>998244353</var> で割った余りを出力してください。</p></section></div>
<div class="part"><section><h3>制約</h3><ul><li><var>1 \leq N \leq 10^5</var></li><li>入力は全て整数である。</li></ul></section></div>
<div class="part"><section><h3>入力例 1</h3><pre>3
</pre></section></div>
<div class="part"><section><h3>出力例 1</h3><pre>Yes
</pre></section></div>
</body></html>"#;

    #[test]
    fn test_markup_to_text() {
        assert_eq!(markup_to_text("<p>A &lt; B &amp;&amp; C</p>"), "A < B && C");
        assert_eq!(markup_to_text("x&#160;y&#x41;&unknown;"), "x\u{a0}yA&unknown;");
        assert_eq!(markup_to_text("<script>var a = '<b>';</script>ok"), "ok");
    }

    #[test]
    fn test_markup_to_text_keeps_bare_less_than() {
        assert_eq!(markup_to_text("<var>1 < N < 10</var>"), "1 < N < 10");
        assert_eq!(markup_to_text("<p>If A < B,\nprint it.</p>"), "If A < B,\nprint it.");
        assert_eq!(markup_to_text("a <!-- note --> b </ var>"), "a  b </ var>");
    }

    #[test]
    fn test_nbsp_forms_decode_alike() {
        assert_eq!(markup_to_text("a&nbsp;b"), markup_to_text("a&#160;b"));
        assert_eq!(markup_to_text("a&nbsp;b"), "a\u{a0}b");
    }

    #[test]
    fn test_sentences_with_bare_less_than() {
        let html = "<ul><li><var>1 < N < 10</var></li>\n<li>x</li></ul>\n\
                    <p>If A < B, print the answer modulo 998244353.</p>";
        let st = Statement::parse(html);
        assert!(st.sentences().iter().any(|s| s == "1 < N < 10"));
        assert!(st
            .sentences()
            .iter()
            .any(|s| s == "If A < B, print the answer modulo 998244353."));
    }

    #[test]
    fn test_is_japanese() {
        assert!(is_japanese('制'));
        assert!(is_japanese('あ'));
        assert!(is_japanese('カ'));
        assert!(!is_japanese('A'));
        assert!(!is_japanese('1'));
        assert_eq!(japanese_only(" 出力例 1 ⊘"), "出力例");
    }

    #[test]
    fn test_statement_sentences() {
        let st = Statement::parse(STATEMENT);
        assert!(st.sentences().iter().any(|s| s.contains("998244353 で割った余り")));
        assert!(!st.sentences().iter().any(|s| s.contains("color: red")));
    }

    #[test]
    fn test_statement_sections() {
        let st = Statement::parse(STATEMENT);
        let titles: Vec<_> = st.sections().iter().map(|s| s.japanese_title()).collect();
        assert_eq!(titles, vec!["問題文", "制約", "入力例", "出力例"]);
        assert_eq!(st.sections()[1].list_items().len(), 2);
        assert_eq!(st.sections()[0].paragraphs().len(), 2);
    }

    #[test]
    fn test_samples() {
        let st = Statement::parse(STATEMENT);
        let samples = st.samples().unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].input, "3\n");
        assert_eq!(samples[0].output, "Yes\n");
    }

    #[test]
    fn test_samples_english_headings() {
        let html = "<section><h3>Sample Input 1</h3><pre>1</pre></section>\
                    <section><h3>Sample Output 1</h3><pre>POSSIBLE</pre></section>";
        let samples = Statement::parse(html).samples().unwrap();
        assert_eq!(samples[0].output, "POSSIBLE");
    }

    #[test]
    fn test_samples_missing() {
        let st = Statement::parse("<section><h3>問題文</h3><p>hello</p></section>");
        assert_eq!(st.samples(), Err(SampleError::NoSamplesFound));
    }

    #[test]
    fn test_samples_unpaired() {
        let html = "<section><h3>出力例 1</h3><pre>Yes</pre></section>";
        assert!(matches!(
            Statement::parse(html).samples(),
            Err(SampleError::FormatNotRecognized { .. })
        ));
    }

    #[test]
    fn test_samples_without_pre() {
        let html = "<section><h3>入力例 1</h3><pre>1</pre></section>\
                    <section><h3>出力例 1</h3><p>Yes</p></section>";
        assert!(matches!(
            Statement::parse(html).samples(),
            Err(SampleError::FormatNotRecognized { .. })
        ));
    }
}
