use booru_domain::entity::Entity;
use booru_domain::value_object::Version;
use booru_macros::entity;

#[entity]
struct Post {
    title: String,
}

#[entity(id = u64, debug = false)]
struct Comment {
    text: String,
    // 已声明的 version 字段会被复用并移到最前
    version: Version,
}

impl std::fmt::Debug for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Comment(..)")
    }
}

fn main() {
    let mut post = Post::new("p-1".to_string(), Version::new());
    assert_eq!(post.id(), "p-1");
    post.set_version(post.version().next());
    assert_eq!(post.version().value(), 1);
    let _ = format!("{:?}", post);
    let _ = post.title.len();

    let comment = Comment::new(7, Version::from_value(3));
    assert_eq!(*comment.id(), 7);
    assert_eq!(comment.version().value(), 3);
    let _ = format!("{:?}", comment);
    let _ = comment.text.is_empty();
}
