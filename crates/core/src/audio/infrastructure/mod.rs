pub mod ffmpeg_cli_extractor;
