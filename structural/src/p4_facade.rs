// Pattern 4: Facade
// Three subsystems sit behind one `play_media` call. The caller never
// touches the audio player, the video player, or the display controller
// directly, and an unsupported type degrades to a diagnostic line while
// the display step still runs.

use colored::Colorize;

#[derive(Default)]
struct AudioPlayer;

impl AudioPlayer {
    fn play_audio(&self, file_name: &str) -> String {
        format!("Playing audio file: {}", file_name)
    }
}

#[derive(Default)]
struct VideoPlayer;

impl VideoPlayer {
    fn play_video(&self, file_name: &str) -> String {
        format!("Playing video file: {}", file_name)
    }
}

#[derive(Default)]
struct DisplayController;

impl DisplayController {
    fn display_output(&self) -> String {
        "Displaying output".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MediaType {
    Audio,
    Video,
    Unsupported,
}

impl MediaType {
    // Convenience for callers who only have a file name.
    fn from_path(file_name: &str) -> Self {
        match file_name.rsplit_once('.').map(|(_, ext)| ext) {
            Some("mp3") | Some("wav") | Some("flac") => MediaType::Audio,
            Some("mp4") | Some("mkv") | Some("avi") => MediaType::Video,
            _ => MediaType::Unsupported,
        }
    }
}

#[derive(Default)]
struct MultimediaFacade {
    audio_player: AudioPlayer,
    video_player: VideoPlayer,
    display_controller: DisplayController,
}

impl MultimediaFacade {
    /// One entry point for the whole pipeline. The display step always
    /// runs, even for unsupported input.
    fn play_media(&self, file_name: &str, media_type: MediaType) -> Vec<String> {
        let mut lines = Vec::new();
        match media_type {
            MediaType::Audio => lines.push(self.audio_player.play_audio(file_name)),
            MediaType::Video => lines.push(self.video_player.play_video(file_name)),
            MediaType::Unsupported => lines.push("Unsupported media type".to_string()),
        }
        lines.push(self.display_controller.display_output());
        lines
    }
}

fn main() {
    println!("{}", "=== Facade Pattern Demo ===".bold());

    let facade = MultimediaFacade::default();
    let requests = [
        ("song.mp3", MediaType::Audio),
        ("movie.mp4", MediaType::Video),
        ("image.jpg", MediaType::Unsupported),
    ];

    for (file_name, media_type) in requests {
        println!();
        for line in facade.play_media(file_name, media_type) {
            if line == "Unsupported media type" {
                println!("{}", line.red());
            } else {
                println!("{}", line);
            }
        }
    }

    // The facade can also work out the type itself.
    println!();
    for line in facade.play_media("podcast.wav", MediaType::from_path("podcast.wav")) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_goes_through_the_audio_player() {
        let facade = MultimediaFacade::default();
        assert_eq!(
            facade.play_media("song.mp3", MediaType::Audio),
            vec!["Playing audio file: song.mp3", "Displaying output"]
        );
    }

    #[test]
    fn test_video_goes_through_the_video_player() {
        let facade = MultimediaFacade::default();
        assert_eq!(
            facade.play_media("movie.mp4", MediaType::Video),
            vec!["Playing video file: movie.mp4", "Displaying output"]
        );
    }

    #[test]
    fn test_unsupported_still_reaches_the_display() {
        let facade = MultimediaFacade::default();
        assert_eq!(
            facade.play_media("image.jpg", MediaType::Unsupported),
            vec!["Unsupported media type", "Displaying output"]
        );
    }

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(MediaType::from_path("song.mp3"), MediaType::Audio);
        assert_eq!(MediaType::from_path("clip.mkv"), MediaType::Video);
        assert_eq!(MediaType::from_path("image.jpg"), MediaType::Unsupported);
        assert_eq!(MediaType::from_path("no_extension"), MediaType::Unsupported);
    }
}
