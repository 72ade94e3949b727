/// Regex location of the mopeds INSERT statement's VALUES payload.
pub mod statement;
/// State-machine tokenizer splitting the payload into row tuples.
pub mod tuple_extractor;
