// Example: guarding an external script's load-and-init sequence.
use marquee_adapter::OnceLoader;

static BACKGROUND_SCENE: OnceLoader = OnceLoader::new();

fn mount_hero_section() {
    // Every mount asks for the scene; only the first one loads it.
    let ran = BACKGROUND_SCENE.load(|| {
        println!("injecting animated-background script and calling init()");
    });
    println!("mount: performed load = {ran}");
}

fn main() {
    mount_hero_section();
    mount_hero_section();
    println!("initialized = {}", BACKGROUND_SCENE.is_loaded());
}
