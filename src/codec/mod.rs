pub mod byte_codec;
