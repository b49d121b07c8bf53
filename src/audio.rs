use cord_core::SoundCue;
use web_sys as web;

/// One preloaded `<audio>` element per cue.
pub struct Sounds {
    clips: Vec<(SoundCue, web::HtmlAudioElement)>,
}

impl Sounds {
    pub fn load() -> anyhow::Result<Self> {
        let mut clips = Vec::with_capacity(SoundCue::ALL.len());
        for cue in SoundCue::ALL {
            let el = web::HtmlAudioElement::new_with_src(cue.path())
                .map_err(|e| anyhow::anyhow!("audio {}: {:?}", cue.path(), e))?;
            clips.push((cue, el));
        }
        Ok(Self { clips })
    }

    // Fire and forget; a rejected play() (autoplay policy) is only logged.
    pub fn play(&self, cue: SoundCue) {
        if let Some((_, el)) = self.clips.iter().find(|(c, _)| *c == cue) {
            if let Err(e) = el.play() {
                log::warn!("[audio] {:?} failed: {:?}", cue, e);
            }
        }
    }
}
