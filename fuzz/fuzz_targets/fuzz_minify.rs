#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsmin::{MinifyOptions, minify_bytes_with, minify_with};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 1; // 1 flag byte

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b"\r\n",
    b"\x0b",
    b"\x0c",
    "\u{00A0}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{FEFF}".as_bytes(),
];

/// Script fragments that steer the input towards the interesting states:
/// comment openers, both quote styles, escapes, regex openers and the
/// characters whose line breaks must survive.
static FRAGMENT_TABLE: &[&[u8]] = &[
    b"/*", b"*/", b"//", b"/", b"'", b"\"", b"\\", b"=", b"(", b")", b"{", b"}", b"[", b"]",
    b";", b",", b"+", b"-", b"++", b"!", b"?", b":", b"&&", b"||", b"return", b"var", b"x",
    b"$_", b"42", b"\xc3\xa9", b"\xff",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER {
        return fuzzer_mutate(data, size, max_size);
    }
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03); // 2 bits

        let mut prefix = HEADER;
        let target = with_rng(|rng| rng.random_range(HEADER..=max_size));

        while prefix < target {
            let before = prefix;

            prefix += append_whitespace(&mut data[prefix..], max_size - prefix);
            prefix += append_fragment(&mut data[prefix..], max_size - prefix);

            if prefix == before {
                break;
            }
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 1‒N whitespace sequences (N chosen randomly) to `buf`, but never
/// exceed `limit`. Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n = rng.random_range(1..=limit.min(4));
        let mut written = 0;

        for _ in 0..n {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];

            // Stop if this whitespace would overflow the caller’s slice.
            if written + w.len() > limit {
                break;
            }

            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_fragment(buf: &mut [u8], limit: usize) -> usize {
    let bytes: Vec<u8> = with_rng(|rng| (0..16).map(|_| rng.random::<u8>()).collect());
    let Ok(fragment) = ArbitraryFragment::arbitrary(&mut arbitrary::Unstructured::new(&bytes))
    else {
        return 0;
    };

    let len = fragment.0.len().min(limit);
    buf[..len].copy_from_slice(&fragment.0[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryFragment(Vec<u8>);

impl<'a> Arbitrary<'a> for ArbitraryFragment {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let fragment = match u.choose_index(4)? {
            0 => {
                // A well-formed string literal.
                let quote = *u.choose(b"'\"")?;
                let body: String = u.arbitrary()?;
                let mut out = vec![quote];
                out.extend(body.bytes().filter(|&b| b != quote && b != b'\\' && b >= b' '));
                out.push(quote);
                out
            }
            1 => {
                // A well-formed block comment.
                let body: String = u.arbitrary()?;
                let mut out = b"/*".to_vec();
                out.extend_from_slice(body.replace("*/", "").as_bytes());
                out.extend_from_slice(b"*/");
                out
            }
            _ => u.choose(FRAGMENT_TABLE)?.to_vec(),
        };
        Ok(ArbitraryFragment(fragment))
    }
}

fn minify(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let data = &data[HEADER..];
    let options = MinifyOptions {
        trim: flags & 1 != 0,
        panic_on_error: false,
    };

    if flags & 2 != 0 {
        let text = String::from_utf8_lossy(data);
        let from_str = minify_with(&text, options);
        let from_bytes = minify_bytes_with(text.as_bytes(), options);
        match (from_str, from_bytes) {
            (Ok(s), Ok(b)) => {
                // UTF-8 in, UTF-8 out: nothing was replaced on the way.
                assert_eq!(s.as_bytes(), b.as_slice());
                assert!(s.len() <= text.len() + 1);
            }
            (Err(a), Err(b)) => assert_eq!(a, b),
            (a, b) => panic!("entry points disagree: {a:?} vs {b:?}"),
        }
    } else if let Ok(out) = minify_bytes_with(data, options) {
        assert!(out.len() <= data.len() + 1);
    }
}

fuzz_target!(|data: &[u8]| minify(data));
