//! Streaming contract tests over a fixed corpus: chunk plans (fixed sizes,
//! every boundary, seeded fuzz boundaries) must never change the observable
//! tokenization, and the token table must tile the normalized source.

use css::{CssTokenizer, TokenizerConfig, token_table_line};

const CORPUS: &[&str] = &[
    "",
    "a { color: #FF0099; }",
    "a{color:red;background:url( img.png )}",
    "@media (min-width: 40em) { .x::before { content: \"\\201C\"; } }",
    "<!-- x --> /* comment */ y",
    "10px -3.5e+2 .5% \\41 BC 1e3 7e-2q",
    "url(\"quoted\") url( spaced ) url() url(bad\"url)",
    "#a#-1#--x .cls > * + li ~ i[href^=\"http\"]",
    "--custom: calc(100% - 2px); --x:1;",
    "'single \\' quote' \"double \\\" quote\"",
    "\u{0}weird\r\nnewlines\rand\u{C}forms",
    "ident-\u{E9}\u{1F600} @-moz-thing u+not-a-range",
    "bad strings: \"unterminated\nnext line",
    "/* unterminated comment",
    "negative: -0 -0.5 -.5e2 -e -\\65",
];

const FUZZ_RUNS: usize = 6;
const FUZZ_SEED: u64 = 0xC0FFEE;

fn lex_whole(input: &str) -> CssTokenizer {
    let mut tokenizer = CssTokenizer::new(TokenizerConfig::default());
    tokenizer
        .push_str(input)
        .expect("recover mode only fails on capacity");
    tokenizer.end().expect("end");
    tokenizer
}

fn lex_with_boundaries(input: &str, boundaries: &[usize]) -> CssTokenizer {
    let mut tokenizer = CssTokenizer::new(TokenizerConfig::default());
    let mut previous = 0;
    for &boundary in boundaries {
        tokenizer
            .push_str(&input[previous..boundary])
            .expect("recover mode only fails on capacity");
        previous = boundary;
    }
    tokenizer
        .push_str(&input[previous..])
        .expect("recover mode only fails on capacity");
    tokenizer.end().expect("end");
    tokenizer
}

fn summary(tokenizer: &CssTokenizer) -> Vec<String> {
    let mut lines: Vec<String> = tokenizer
        .raw_tokens()
        .map(|t| token_table_line(&t))
        .collect();
    for err in tokenizer.errors() {
        lines.push(format!("error: {}", err.kind.describe()));
    }
    lines
}

fn char_boundaries(input: &str) -> Vec<usize> {
    input
        .char_indices()
        .map(|(index, _)| index)
        .filter(|&index| index != 0)
        .collect()
}

fn fixed_size_boundaries(input: &str, size: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut next = size;
    for index in char_boundaries(input) {
        if index >= next {
            out.push(index);
            next = index + size;
        }
    }
    out
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() >> 32) as usize % upper
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.len() < 2 {
            return;
        }
        for i in (1..items.len()).rev() {
            let j = self.gen_range(i + 1);
            items.swap(i, j);
        }
    }
}

fn fuzz_boundaries(input: &str, seed: u64) -> Vec<usize> {
    let candidates = char_boundaries(input);
    if candidates.is_empty() {
        return Vec::new();
    }
    let mut rng = Lcg::new(seed);
    let mut picks = candidates.clone();
    rng.shuffle(&mut picks);
    let count = 1 + rng.gen_range(candidates.len().clamp(1, 32));
    picks.truncate(count);
    picks.sort_unstable();
    picks.dedup();
    picks
}

#[test]
fn fixed_size_chunk_plans_match_whole_input() {
    for input in CORPUS {
        let whole = summary(&lex_whole(input));
        for size in [1usize, 2, 3, 4, 8, 16, 32, 64] {
            let boundaries = fixed_size_boundaries(input, size);
            let chunked = summary(&lex_with_boundaries(input, &boundaries));
            assert_eq!(
                whole, chunked,
                "fixed size={size} changed tokens for {input:?}"
            );
        }
    }
}

#[test]
fn every_boundary_chunk_plan_matches_whole_input() {
    for input in CORPUS {
        let whole = summary(&lex_whole(input));
        let boundaries = char_boundaries(input);
        let chunked = summary(&lex_with_boundaries(input, &boundaries));
        assert_eq!(whole, chunked, "per-code-point feed changed {input:?}");
    }
}

#[test]
fn seeded_fuzz_chunk_plans_match_whole_input() {
    for input in CORPUS {
        let whole = summary(&lex_whole(input));
        for run in 0..FUZZ_RUNS {
            let seed = FUZZ_SEED.wrapping_add(run as u64);
            let boundaries = fuzz_boundaries(input, seed);
            let chunked = summary(&lex_with_boundaries(input, &boundaries));
            assert_eq!(
                whole, chunked,
                "fuzz seed=0x{seed:016x} changed tokens for {input:?}"
            );
        }
    }
}

#[test]
fn fuzz_plan_generation_is_seed_deterministic() {
    let input = CORPUS[3];
    assert_eq!(
        fuzz_boundaries(input, FUZZ_SEED),
        fuzz_boundaries(input, FUZZ_SEED)
    );
}

#[test]
fn token_table_tiles_the_normalized_source() {
    for input in CORPUS {
        let tokenizer = lex_whole(input);
        let mut previous_end = 0;
        for token in tokenizer.raw_tokens() {
            assert_eq!(
                token.start(),
                previous_end,
                "gap before token {} in {input:?}",
                token.index()
            );
            assert!(token.end() > token.start(), "zero-width token in {input:?}");
            previous_end = token.end();
        }
    }
}

#[test]
fn ends_are_strictly_increasing() {
    for input in CORPUS {
        let tokenizer = lex_whole(input);
        let ends: Vec<usize> = tokenizer.raw_tokens().map(|t| t.end()).collect();
        assert!(
            ends.windows(2).all(|w| w[0] < w[1]),
            "token ends must strictly increase in {input:?}"
        );
    }
}

#[test]
fn code_point_chunks_match_str_pushes() {
    let input = "@media url( x ) { .a { width: 50%; } }";
    let via_str = summary(&lex_whole(input));

    let mut tokenizer = CssTokenizer::new(TokenizerConfig::default());
    let code_points: Vec<u32> = input.chars().map(|c| c as u32).collect();
    for chunk in code_points.chunks(3) {
        tokenizer.push_chunk(chunk).expect("lex");
    }
    tokenizer.end().expect("end");
    assert_eq!(summary(&tokenizer), via_str);
}
