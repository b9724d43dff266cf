use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-purple-brandPurle text-white px-6 py-10 mt-16">
            <div class="flex flex-col items-center gap-2 font-lemonMilkLight">
                <span class="font-lemonMilkBold text-xl">{"doisnovemeia"}</span>
                <p class="text-sm">{"Todos os direitos reservados."}</p>
            </div>
        </footer>
    }
}
