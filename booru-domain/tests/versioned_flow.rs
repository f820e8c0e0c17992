use booru_domain::entity::Entity;
use booru_domain::error::DomainError;
use booru_domain::field_selector::{FieldRegistry, SerializableEntity, serialize_fields};
use booru_domain::text::snake_case_to_lower_camel_case_keys;
use booru_domain::value_object::Version;
use booru_domain::{entity, version_guard};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};

#[entity(id = u64)]
struct Post {
    safety: String,
    tags: Vec<String>,
    #[serde(skip)]
    note_loads: AtomicUsize,
}

impl SerializableEntity for Post {
    fn field_registry(&self) -> FieldRegistry<'_> {
        FieldRegistry::new()
            .field("id", move || self.id)
            .field("version", move || self.version)
            .field("safety", move || self.safety.clone())
            .field("tag_count", move || self.tags.len())
            .field("notes", move || {
                self.note_loads.fetch_add(1, Ordering::SeqCst);
                Vec::<String>::new()
            })
    }
}

fn post() -> Post {
    let mut post = Post::new(42, Version::from_value(1));
    post.safety = "safe".into();
    post.tags = vec!["sky".into(), "sea".into()];
    post
}

#[test]
fn verify_mutate_bump_then_serialize_requested_fields() {
    let mut post = post();

    version_guard::verify(&post, Version::from_value(1)).unwrap();
    post.safety = "sketchy".into();
    version_guard::bump(&mut post);

    let requested = vec!["version".to_string(), "safety".to_string()];
    let out = serialize_fields(Some(&post), Some(requested.as_slice()))
        .unwrap()
        .unwrap();

    assert_eq!(
        Value::Object(out),
        json!({"version": 2, "safety": "sketchy"})
    );
    assert_eq!(post.note_loads.load(Ordering::SeqCst), 0);
}

#[test]
fn concurrent_writers_only_first_wins() {
    let mut stored = post();
    let observed_by_a = stored.version();
    let observed_by_b = stored.version();

    version_guard::verify(&stored, observed_by_a).unwrap();
    stored.tags.push("sun".into());
    version_guard::bump(&mut stored);

    let err = version_guard::verify(&stored, observed_by_b).unwrap_err();
    assert!(matches!(err, DomainError::VersionConflict { .. }));
    assert_eq!(stored.version().value(), 2);
    assert_eq!(stored.tags.len(), 3);
}

#[test]
fn full_serialization_converts_keys_for_responses() {
    let post = post();
    let out = serialize_fields(Some(&post), None).unwrap().unwrap();
    assert_eq!(post.note_loads.load(Ordering::SeqCst), 1);

    let out = snake_case_to_lower_camel_case_keys(out);
    let keys: Vec<&str> = out.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "version", "safety", "tagCount", "notes"]);
}
