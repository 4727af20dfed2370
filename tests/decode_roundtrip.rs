use quill::codec::{decode_index, decode_page, encode_index, encode_page};
use quill::error::QuillError;
use quill::model::{FixedId, NotebookIndex, Page, Point, Stroke, FIXED_ID_LEN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TITLE_CHARS: &[char] = &['a', 'Z', '7', ' ', '-', 'é', 'ß', '日', '✎'];

fn random_id(rng: &mut StdRng) -> FixedId {
    let mut bytes = [0u8; FIXED_ID_LEN];
    for b in bytes.iter_mut() {
        *b = rng.gen_range(b'0'..=b'z');
    }
    FixedId::new(bytes)
}

fn random_index(rng: &mut StdRng) -> NotebookIndex {
    let pages = rng.gen_range(0..12);
    let title_len = rng.gen_range(0..24);
    NotebookIndex {
        format_version: rng.gen(),
        page_ids: (0..pages).map(|_| random_id(rng)).collect(),
        current_page: rng.gen_range(0..=pages as i32),
        title: (0..title_len)
            .map(|_| TITLE_CHARS[rng.gen_range(0..TITLE_CHARS.len())])
            .collect(),
        created_at: rng.gen(),
        modified_at: rng.gen(),
        trailing_id: random_id(rng),
    }
}

fn random_stroke(rng: &mut StdRng) -> Stroke {
    let points = rng.gen_range(0..30);
    Stroke {
        format_version: rng.gen(),
        color: rng.gen(),
        thickness: rng.gen_range(0..64),
        tool: rng.gen_range(0..4),
        points: (0..points)
            .map(|_| {
                Point::new(
                    rng.gen_range(-0.1f32..1.1),
                    rng.gen_range(-0.1f32..1.1),
                    rng.gen_range(0.0f32..2.0),
                )
            })
            .collect(),
    }
}

fn random_page(rng: &mut StdRng) -> Page {
    let strokes = rng.gen_range(0..8);
    Page {
        format_version: rng.gen(),
        trailing_id: random_id(rng),
        tool_format_version: rng.gen(),
        tag_count: rng.gen_range(0..5),
        reserved_a: rng.gen(),
        reserved_b: rng.gen(),
        paper_type: rng.gen_range(0..10),
        image_count: rng.gen_range(0..3),
        reserved_c: rng.gen(),
        read_only: rng.gen(),
        aspect_ratio: rng.gen_range(0.5f32..2.0),
        strokes: (0..strokes).map(|_| random_stroke(rng)).collect(),
        line_count: rng.gen_range(0..4),
        reserved_d: rng.gen(),
        text_count: rng.gen_range(0..4),
    }
}

#[test]
fn random_indexes_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x5eed_1dec);
    for _ in 0..200 {
        let index = random_index(&mut rng);
        let bytes = encode_index(&index).unwrap();
        let decoded = decode_index(&bytes).unwrap();
        assert_eq!(decoded, index);
        assert_eq!(decoded.page_ids.len(), index.page_ids.len());
    }
}

#[test]
fn random_pages_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x0051_7a6e);
    for _ in 0..200 {
        let page = random_page(&mut rng);
        let bytes = encode_page(&page).unwrap();
        let decoded = decode_page(&bytes).unwrap();
        assert_eq!(decoded, page);
        for (got, want) in decoded.strokes.iter().zip(&page.strokes) {
            assert_eq!(got.point_count(), want.points.len());
        }
    }
}

#[test]
fn random_truncations_never_default() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let page = random_page(&mut rng);
        let bytes = encode_page(&page).unwrap();
        let cut = rng.gen_range(0..bytes.len());
        match decode_page(&bytes[..cut]) {
            Err(QuillError::TruncatedInput { available, needed, .. }) => {
                assert!(available < needed)
            }
            other => panic!("cut at {} of {} gave {:?}", cut, bytes.len(), other),
        }

        let index = random_index(&mut rng);
        let bytes = encode_index(&index).unwrap();
        let cut = rng.gen_range(0..bytes.len());
        assert!(matches!(
            decode_index(&bytes[..cut]),
            Err(QuillError::TruncatedInput { .. })
        ));
    }
}
