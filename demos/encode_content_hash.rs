use ens_contenthash::{detect_cid_version, encode_content_hash};

fn main() -> anyhow::Result<()> {
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec![
            "QmPK1s3pNYLi9ERiq3BDxKa4XosgWwFRQUydHUtz4YgpqB".to_string(),
            "bafybeihkoviema7g3gxyt6la7v4mbgn2wh5qoxmkvqmv7k7n7qlomg4elu".to_string(),
        ]
    } else {
        inputs
    };

    for cid in &inputs {
        println!("CID:          {}", cid);
        println!("Version:      {}", detect_cid_version(cid));
        println!("Content hash: {}\n", encode_content_hash(cid)?);
    }

    Ok(())
}
