use masker::Mask;

#[derive(Mask)]
enum Credential {
    Password(#[mask(Password)] String),
    Email {
        #[mask(Email)]
        address: String,
        verified: bool,
    },
    Anonymous,
}

#[derive(Mask)]
enum Never {}

fn main() {
    let credential = Credential::Email {
        address: "ann@mail.box".into(),
        verified: true,
    };
    let _ = credential.masked();
    let _ = Credential::Password("hunter2".into()).masked();
    let _ = Credential::Anonymous.masked();
}
