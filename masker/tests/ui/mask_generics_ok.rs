use std::marker::PhantomData;

use masker::Mask;

#[derive(Mask)]
struct Tagged<T, Tag> {
    #[mask(Phone)]
    value: T,
    _tag: PhantomData<Tag>,
}

#[derive(Mask)]
struct Batch<T>
where
    T: Clone,
{
    items: Vec<T>,
}

struct Customers;

fn main() {
    let tagged: Tagged<Vec<String>, Customers> = Tagged {
        value: vec!["+12345678901".into()],
        _tag: PhantomData,
    };
    let _ = tagged.masked();

    let batch = Batch {
        items: vec![Some(String::from("plain"))],
    };
    let _ = batch.masked();
}
