use anyhow::Context;
use ens_contenthash::codec::{codec_name, hash_name};
use ens_contenthash::ContentHash;

fn main() -> anyhow::Result<()> {
    let record = std::env::args().nth(1).unwrap_or_else(|| {
        "0xe30101701220ea75504603e6d9af89f960fd78c099bab1fb075d8aac195fabedfc16e61b845d".to_string()
    });

    let content_hash = ContentHash::from_hex(&record).context("not a valid content hash")?;
    let (namespace, cid) = content_hash.decode()?;
    let hash = cid.hash();

    println!("Namespace: {}", namespace);
    println!("CID:       {}", cid);
    println!("Version:   {:?}", cid.version());
    println!(
        "Codec:     0x{:x} ({})",
        cid.codec(),
        codec_name(cid.codec()).unwrap_or("unknown")
    );
    println!(
        "Hash:      0x{:x} ({}), {} bytes",
        hash.code(),
        hash_name(hash.code()).unwrap_or("unknown"),
        hash.size()
    );
    println!("Digest:    {}", hex::encode(hash.digest()));

    Ok(())
}
