/// Seed prefix for the escrow PDA; the full derivation is
/// `[ESCROW_SEED, maker, seed.to_le_bytes()]`.
pub const ESCROW_SEED: &[u8] = b"escrow";
