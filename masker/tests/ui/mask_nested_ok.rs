use masker::Mask;

#[derive(Clone, Mask)]
struct Card {
    #[mask(CardPan)]
    pan: String,
}

#[derive(Clone, Mask)]
struct Wallet {
    #[mask(Email)]
    owner: String,
    cards: Vec<Card>,
    primary: Option<Box<Card>>,
}

fn main() {
    let wallet = Wallet {
        owner: "user@mail.box".into(),
        cards: vec![Card {
            pan: "1234567876543210".into(),
        }],
        primary: None,
    };

    let _ = wallet.clone_masked();
}
