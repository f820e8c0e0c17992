use booru_macros::value_object;

#[value_object]
struct Rank {
    level: i64,
}

#[value_object(debug = false)]
struct Secret(String);

#[value_object]
enum Safety {
    #[default]
    Safe,
    Unsafe,
}

fn main() {
    let _ = format!("{:?}", Rank { level: 0 });

    let a = Rank::default();
    let _b = a.clone();
    let _eq = a == Rank { level: 0 };

    let _ = Secret("x".into()).0.len();

    let lv: Safety = Default::default();
    let _ = format!("{:?}", lv);
    let _ = Safety::Unsafe;
}
