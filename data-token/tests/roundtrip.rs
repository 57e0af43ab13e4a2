use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use data_profile::{Profile, Skill, SocialLinks, THEME_COLORS};
use data_token::{decode_token, encode_token};
use rstest::rstest;

fn profile_with_skills(count: usize) -> Profile {
    Profile {
        full_name: "Alex Morgan".to_string(),
        title: "Senior Product Designer".to_string(),
        company: "Creative Solutions Inc.".to_string(),
        email: "alex@example.com".to_string(),
        location: "San Francisco, CA".to_string(),
        bio: "Bridging design and technology.".to_string(),
        socials: SocialLinks {
            linkedin: Some("linkedin.com/in/alexmorgan".to_string()),
            website: Some("alexmorgan.design".to_string()),
            ..Default::default()
        },
        theme_color: THEME_COLORS[1].value.to_string(),
        skills: (0..count)
            .map(|i| Skill::new(&format!("Skill {i}"), (i as u32 * 7) % 101))
            .collect(),
        ..Default::default()
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(6)]
#[case(20)]
fn roundtrip_preserves_profile(#[case] skill_count: usize) {
    let original = profile_with_skills(skill_count);
    let token = encode_token(&original);
    assert!(!token.is_empty());
    assert_eq!(decode_token(&token), Some(original));
}

#[test]
fn roundtrip_default_profile() {
    let original = Profile::default();
    let token = encode_token(&original);
    assert_eq!(decode_token(&token), Some(original));
}

#[test]
fn roundtrip_initial_profile() {
    let original = Profile::initial();
    let token = encode_token(&original);
    assert_eq!(decode_token(&token), Some(original));
}

#[test]
fn roundtrip_embedded_photo_data_uri() {
    let mut original = profile_with_skills(3);
    // A small embedded image, the common shape of photoUrl
    let pixels = STANDARD.encode([0x89u8, 0x50, 0x4E, 0x47].repeat(256));
    original.photo_url = Some(format!("data:image/png;base64,{pixels}"));

    let token = encode_token(&original);
    assert_eq!(decode_token(&token), Some(original));
}

#[test]
fn roundtrip_keeps_empty_optionals_absent() {
    let original = Profile {
        full_name: "Quiet Card".to_string(),
        ..Default::default()
    };
    let decoded = decode_token(&encode_token(&original)).unwrap();

    assert_eq!(decoded.socials, SocialLinks::default());
    assert_eq!(decoded.photo_url, None);
    assert_eq!(decoded.video_url, None);
}

#[test]
fn legacy_base64_link_still_decodes() {
    let original = profile_with_skills(4);
    // Simulates a link generated by the old uncompressed scheme
    let legacy_token = STANDARD.encode(original.to_json().unwrap());

    assert_eq!(decode_token(&legacy_token), Some(original));
}

#[rstest]
#[case("")]
#[case("%%%%%%")]
#[case("!!!not-base64!!!")]
#[case("####====####")]
#[case("\u{1F600}\u{1F600}\u{1F600}")]
#[case("AAAA AAAA AAAA")]
fn corrupt_tokens_decode_to_none(#[case] token: &str) {
    assert_eq!(decode_token(token), None);
}

#[test]
fn truncated_token_decodes_to_none() {
    let token = encode_token(&profile_with_skills(6));
    assert_eq!(decode_token(&token[..token.len() / 2]), None);
}

#[test]
fn encode_twice_yields_identical_tokens() {
    let profile = profile_with_skills(5);
    assert_eq!(encode_token(&profile), encode_token(&profile));
}

// A fully populated card encodes to a non-empty URL-safe token and
// decodes deep-equal, nothing lost along the way.
#[test]
fn jane_lee_scenario() {
    let original = Profile {
        full_name: "Jane Lee".to_string(),
        title: "CTO".to_string(),
        company: "Acme".to_string(),
        email: "jane@acme.io".to_string(),
        phone: String::new(),
        location: "NYC".to_string(),
        bio: "Builder.".to_string(),
        socials: SocialLinks {
            linkedin: Some("linkedin.com/in/jane".to_string()),
            ..Default::default()
        },
        photo_url: None,
        video_url: None,
        theme_color: "#4f46e5".to_string(),
        skills: vec![Skill {
            subject: "Go".to_string(),
            score: 80,
            full_mark: 100,
        }],
    };

    let token = encode_token(&original);
    assert!(!token.is_empty());
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_eq!(decode_token(&token), Some(original));
}
