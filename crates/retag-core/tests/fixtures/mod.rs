//! Minimal audio and image byte streams for exercising `lofty` end to end.
//!
//! Each builder produces the smallest input the library will accept as a
//! real file of that type, so the tests need no binary assets.

use std::fs;
use std::path::{Path, PathBuf};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo.
const MP3_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MP3_FRAME_LEN: usize = 417;
const MP3_FRAME_COUNT: usize = 20;

const SAMPLE_RATE: u32 = 44_100;

pub fn mp3_bytes() -> Vec<u8> {
    let mut bytes = Vec::with_capacity(MP3_FRAME_LEN * MP3_FRAME_COUNT);
    for _ in 0..MP3_FRAME_COUNT {
        let mut frame = vec![0u8; MP3_FRAME_LEN];
        frame[..4].copy_from_slice(&MP3_FRAME_HEADER);
        bytes.extend_from_slice(&frame);
    }
    bytes
}

const FLAC_BLOCK_STREAMINFO: u8 = 0;
const FLAC_BLOCK_PADDING: u8 = 1;
const FLAC_BLOCK_PICTURE: u8 = 6;

/// MP3 frames followed by a 128-byte ID3v1 trailer and no ID3v2 tag.
pub fn mp3_with_id3v1_bytes(title: &str) -> Vec<u8> {
    let mut bytes = mp3_bytes();

    let mut tag = [0u8; 128];
    tag[..3].copy_from_slice(b"TAG");
    let title = title.as_bytes();
    let len = title.len().min(30);
    tag[3..3 + len].copy_from_slice(&title[..len]);
    tag[93..97].copy_from_slice(b"1999");
    // Genre: none
    tag[127] = 0xFF;

    bytes.extend_from_slice(&tag);
    bytes
}

/// `fLaC` marker, STREAMINFO (stereo, 16-bit, one second) and a trailing
/// PADDING block. lofty needs something after STREAMINFO to rewrite into.
pub fn flac_bytes() -> Vec<u8> {
    let mut bytes = b"fLaC".to_vec();
    push_flac_block(&mut bytes, FLAC_BLOCK_STREAMINFO, false, &stream_info());
    push_flac_block(&mut bytes, FLAC_BLOCK_PADDING, true, &[0u8; 16]);
    bytes
}

/// Like [`flac_bytes`], with a back-cover PICTURE block already embedded.
pub fn flac_with_picture_bytes() -> Vec<u8> {
    let mut bytes = b"fLaC".to_vec();
    push_flac_block(&mut bytes, FLAC_BLOCK_STREAMINFO, false, &stream_info());
    push_flac_block(&mut bytes, FLAC_BLOCK_PICTURE, false, &picture_block(4, &png_bytes()));
    push_flac_block(&mut bytes, FLAC_BLOCK_PADDING, true, &[0u8; 16]);
    bytes
}

fn push_flac_block(bytes: &mut Vec<u8>, block_type: u8, last: bool, content: &[u8]) {
    let header = if last { block_type | 0x80 } else { block_type };
    let len = u32::try_from(content.len()).unwrap().to_be_bytes();

    bytes.push(header);
    bytes.extend_from_slice(&len[1..]);
    bytes.extend_from_slice(content);
}

fn stream_info() -> [u8; 34] {
    let mut stream_info = [0u8; 34];
    // Min and max block size
    stream_info[0..2].copy_from_slice(&4096u16.to_be_bytes());
    stream_info[2..4].copy_from_slice(&4096u16.to_be_bytes());
    // Min and max frame size stay unknown (0)

    let channels: u64 = 2;
    let bits_per_sample: u64 = 16;
    let total_samples = u64::from(SAMPLE_RATE);
    let packed = (u64::from(SAMPLE_RATE) << 44)
        | ((channels - 1) << 41)
        | ((bits_per_sample - 1) << 36)
        | total_samples;
    stream_info[10..18].copy_from_slice(&packed.to_be_bytes());
    // MD5 signature stays zeroed

    stream_info
}

fn picture_block(pic_type: u32, data: &[u8]) -> Vec<u8> {
    let mime = b"image/png";
    let description = b"Back";

    let mut block = Vec::new();
    block.extend_from_slice(&pic_type.to_be_bytes());
    block.extend_from_slice(&u32::try_from(mime.len()).unwrap().to_be_bytes());
    block.extend_from_slice(mime);
    block.extend_from_slice(&u32::try_from(description.len()).unwrap().to_be_bytes());
    block.extend_from_slice(description);
    // Width, height, colour depth, indexed colours
    for value in [1u32, 1, 32, 0] {
        block.extend_from_slice(&value.to_be_bytes());
    }
    block.extend_from_slice(&u32::try_from(data.len()).unwrap().to_be_bytes());
    block.extend_from_slice(data);
    block
}

/// RIFF/WAVE, mono 16-bit PCM, a tenth of a second of silence.
pub fn wav_bytes() -> Vec<u8> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = SAMPLE_RATE * u32::from(block_align);
    let data_len = byte_rate / 10;

    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(4 + (8 + 16) + (8 + data_len)).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&bits_per_sample.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(bytes.len() + data_len as usize, 0);
    bytes
}

/// A 1x1 RGBA PNG (signature, IHDR, IEND).
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[
        0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R', // IHDR, 13 bytes
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
        0x08, 0x06, 0x00, 0x00, 0x00, // 8-bit RGBA
        0x1F, 0x15, 0xC4, 0x89, // CRC
    ]);
    bytes.extend_from_slice(&[
        0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82,
    ]);
    bytes
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}
