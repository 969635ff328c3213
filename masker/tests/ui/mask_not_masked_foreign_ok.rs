use masker::Mask;

struct Instant(u64);

#[derive(Mask)]
struct AuditEntry {
    #[not_masked]
    at: Instant,
    #[mask(Generic)]
    message: String,
    sequence: u32,
}

fn main() {
    let entry = AuditEntry {
        at: Instant(0),
        message: "card declined".into(),
        sequence: 1,
    };
    let masked = entry.masked();
    let _ = (masked.at.0, masked.sequence);
}
