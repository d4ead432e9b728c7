#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tagscan::{MENTION_PREFIX, PrefixScanner, ScanOptions, TAG_PREFIX, TerminatorMode};

#[derive(Arbitrary, Debug)]
struct Input {
    content: String,
    tag_prefix: bool,
    implicit_end: bool,
}

fuzz_target!(|input: Input| {
    let prefix = if input.tag_prefix {
        TAG_PREFIX
    } else {
        MENTION_PREFIX
    };
    let options = ScanOptions {
        terminator: if input.implicit_end {
            TerminatorMode::ImplicitEnd
        } else {
            TerminatorMode::RequireSeparator
        },
    };
    let scanner = PrefixScanner::with_options(prefix, options);

    match scanner.scan(Some(&input.content)) {
        Ok(tokens) => {
            for token in &tokens {
                // A separator always closes a token before the next one opens.
                assert!(!token.contains(' '));
            }
            if !input.implicit_end {
                // A strict success must agree token-for-token with the
                // lenient scan of the same content.
                let relaxed = PrefixScanner::with_options(
                    prefix,
                    ScanOptions {
                        terminator: TerminatorMode::ImplicitEnd,
                    },
                )
                .scan(Some(&input.content))
                .unwrap();
                assert_eq!(tokens, relaxed);
            }
        }
        Err(err) => {
            // Only the strict policy rejects content.
            assert!(!input.implicit_end, "lenient scan failed: {err}");
        }
    }
});
